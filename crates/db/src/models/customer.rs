//! Row type for the `customers` table.

use sqlx::FromRow;
use wallet_core::access_code::AccessCode;
use wallet_core::error::StoreError;
use wallet_core::models::customer::Customer;
use wallet_core::types::{DbId, Timestamp};

/// A customer row from the `customers` table. Includes the access code.
#[derive(Clone, FromRow)]
pub struct CustomerRow {
    pub id: DbId,
    pub full_name: String,
    pub primary_address: String,
    pub plan: String,
    pub access_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = StoreError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let plan = row.plan.parse().map_err(|_| {
            StoreError::Backend(format!("customer {} has unknown plan '{}'", row.id, row.plan))
        })?;
        let access_code = AccessCode::parse(&row.access_code).map_err(|_| {
            StoreError::Backend(format!("customer {} has a malformed access code", row.id))
        })?;

        Ok(Customer {
            id: row.id,
            full_name: row.full_name,
            primary_address: row.primary_address,
            plan,
            access_code,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
