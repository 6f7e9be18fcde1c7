//! Customer rules: access-code format, ownership checks, redaction.
//!
//! Every public function returns [`CustomerView`]; the full [`Customer`]
//! record, and with it the access code, never leaves this module.
//!
//! Mutations check in a fixed order: the id must exist (`NotFound`), then
//! the presented code must match (`Unauthorized`), and only then is the
//! payload validated. Lookups by code alone answer `Unauthorized` for every
//! kind of miss so callers cannot discover which codes are registered.

use crate::access_code::AccessCode;
use crate::error::CoreError;
use crate::models::customer::{
    CreateCustomer, Customer, CustomerChanges, CustomerView, NewCustomer, UpdateCustomer,
};
use crate::rules::validate_input;
use crate::store::CustomerStore;
use crate::types::DbId;

const ENTITY: &str = "Customer";

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}

fn wrong_code() -> CoreError {
    CoreError::Unauthorized("Access code is incorrect or missing".into())
}

/// Rule component for customers.
pub struct CustomerRules;

impl CustomerRules {
    pub async fn create(
        store: &dyn CustomerStore,
        input: CreateCustomer,
    ) -> Result<CustomerView, CoreError> {
        let access_code = AccessCode::parse_required(input.access_code.as_deref())?;
        validate_input(&input)?;

        let customer = store
            .create(NewCustomer {
                full_name: input.full_name,
                primary_address: input.primary_address,
                plan: input.plan,
                access_code,
            })
            .await?;

        tracing::info!(customer_id = customer.id, plan = %customer.plan, "Customer created");
        Ok(customer.to_view())
    }

    pub async fn get(store: &dyn CustomerStore, id: DbId) -> Result<CustomerView, CoreError> {
        store
            .get_by_id(id)
            .await?
            .map(|c| c.to_view())
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_all(store: &dyn CustomerStore) -> Result<Vec<CustomerView>, CoreError> {
        Ok(store.list_all().await?.iter().map(Customer::to_view).collect())
    }

    /// Replace a customer's details, optionally rotating the access code.
    pub async fn edit(
        store: &dyn CustomerStore,
        id: DbId,
        input: UpdateCustomer,
        presented: Option<&str>,
    ) -> Result<CustomerView, CoreError> {
        Self::edit_with(store, id, presented, || Ok(input)).await
    }

    /// Like [`CustomerRules::edit`], but the payload is only produced once
    /// the caller is authorized.
    ///
    /// `parse` runs after the existence and code checks, so a raw request
    /// body can be decoded here without its errors overtaking `NotFound` or
    /// `Unauthorized`.
    pub async fn edit_with<F>(
        store: &dyn CustomerStore,
        id: DbId,
        presented: Option<&str>,
        parse: F,
    ) -> Result<CustomerView, CoreError>
    where
        F: FnOnce() -> Result<UpdateCustomer, CoreError>,
    {
        let current = Self::authorize(store, id, presented).await?;
        let input = parse()?;

        let new_code = input
            .access_code
            .as_deref()
            .map(AccessCode::parse)
            .transpose()?;
        validate_input(&input)?;
        let rotated = new_code.is_some();

        let changes = CustomerChanges {
            full_name: input.full_name,
            primary_address: input.primary_address,
            plan: input.plan,
            access_code: new_code,
        };

        match store
            .update_if_code(id, &current.access_code, changes)
            .await?
        {
            Some(updated) => {
                tracing::info!(customer_id = id, plan = %updated.plan, rotated, "Customer edited");
                Ok(updated.to_view())
            }
            None => Err(Self::classify_miss(store, id).await),
        }
    }

    pub async fn remove(
        store: &dyn CustomerStore,
        id: DbId,
        presented: Option<&str>,
    ) -> Result<(), CoreError> {
        let current = Self::authorize(store, id, presented).await?;

        if !store.delete_if_code(id, &current.access_code).await? {
            return Err(Self::classify_miss(store, id).await);
        }
        tracing::info!(customer_id = id, "Customer removed");
        Ok(())
    }

    /// Find the customer owning `code`.
    pub async fn resolve_by_access_code(
        store: &dyn CustomerStore,
        code: Option<&str>,
    ) -> Result<CustomerView, CoreError> {
        let code =
            code.ok_or_else(|| CoreError::Unauthorized("Access code is required".into()))?;

        // Malformed codes cannot be registered; answer exactly like a miss.
        if AccessCode::parse(code).is_err() {
            return Err(CoreError::Unauthorized("Access code is incorrect".into()));
        }

        let mut holders = store.find_by_access_code(code).await?;
        if holders.len() > 1 {
            // Several customers share this code; it identifies none of them.
            tracing::warn!(holders = holders.len(), "Access code is held by more than one customer");
            return Err(CoreError::Unauthorized("Access code is incorrect".into()));
        }
        let customer = holders
            .pop()
            .ok_or_else(|| CoreError::Unauthorized("Access code is incorrect".into()))?;

        tracing::debug!(customer_id = customer.id, "Access code resolved");
        Ok(customer.to_view())
    }

    /// Load the customer and check the presented code against it.
    async fn authorize(
        store: &dyn CustomerStore,
        id: DbId,
        presented: Option<&str>,
    ) -> Result<Customer, CoreError> {
        let customer = store.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        match presented {
            Some(code) if customer.access_code.verify(code) => Ok(customer),
            _ => {
                tracing::warn!(customer_id = id, "Rejected customer mutation: bad access code");
                Err(wrong_code())
            }
        }
    }

    /// A conditional write missed: the row vanished or its code was rotated.
    async fn classify_miss(store: &dyn CustomerStore, id: DbId) -> CoreError {
        match store.exists_by_id(id).await {
            Ok(false) => not_found(id),
            Ok(true) => wrong_code(),
            Err(err) => err.into(),
        }
    }
}
