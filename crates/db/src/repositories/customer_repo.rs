//! Repository for the `customers` table.

use sqlx::PgPool;
use wallet_core::models::customer::{CustomerChanges, NewCustomer};
use wallet_core::types::DbId;

use crate::models::customer::CustomerRow;

const COLUMNS: &str =
    "id, full_name, primary_address, plan, access_code, created_at, updated_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    pub async fn create(pool: &PgPool, input: &NewCustomer) -> Result<CustomerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (full_name, primary_address, plan, access_code)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerRow>(&query)
            .bind(&input.full_name)
            .bind(&input.primary_address)
            .bind(input.plan.as_str())
            .bind(input.access_code.expose())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CustomerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, CustomerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List all customers in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CustomerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id ASC");
        sqlx::query_as::<_, CustomerRow>(&query).fetch_all(pool).await
    }

    /// Up to two holders of `code`, oldest first.
    ///
    /// Codes are not unique; a second row is enough to tell the caller the
    /// code is ambiguous.
    pub async fn find_by_access_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Vec<CustomerRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM customers WHERE access_code = $1 ORDER BY id ASC LIMIT 2");
        sqlx::query_as::<_, CustomerRow>(&query)
            .bind(code)
            .fetch_all(pool)
            .await
    }

    /// Replace name, address and plan (and the code if rotated), guarded by
    /// the code the caller authorized with.
    ///
    /// Returns `None` if the row is gone or its code no longer matches.
    pub async fn update_if_code(
        pool: &PgPool,
        id: DbId,
        expected_code: &str,
        changes: &CustomerChanges,
    ) -> Result<Option<CustomerRow>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                full_name = $3,
                primary_address = $4,
                plan = $5,
                access_code = COALESCE($6, access_code)
             WHERE id = $1 AND access_code = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerRow>(&query)
            .bind(id)
            .bind(expected_code)
            .bind(&changes.full_name)
            .bind(&changes.primary_address)
            .bind(changes.plan.as_str())
            .bind(changes.access_code.as_ref().map(|c| c.expose()))
            .fetch_optional(pool)
            .await
    }

    /// Delete only if the stored code matches. Returns `true` if a row was removed.
    pub async fn delete_if_code(
        pool: &PgPool,
        id: DbId,
        expected_code: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1 AND access_code = $2")
            .bind(id)
            .bind(expected_code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a customer by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
