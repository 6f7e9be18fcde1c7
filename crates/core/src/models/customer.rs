//! Customer record, its redacted view, and DTOs.
//!
//! [`Customer`] carries the access code and is intentionally not
//! `Serialize`; everything that leaves the customer rules is a
//! [`CustomerView`].

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::access_code::AccessCode;
use crate::plan::Plan;
use crate::types::{DbId, Timestamp};

/// A stored customer, including the secret access code.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: DbId,
    pub full_name: String,
    pub primary_address: String,
    pub plan: Plan,
    pub access_code: AccessCode,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Customer {
    /// Project the record without its access code.
    pub fn to_view(&self) -> CustomerView {
        CustomerView {
            id: self.id,
            full_name: self.full_name.clone(),
            primary_address: self.primary_address.clone(),
            plan: self.plan,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Redacted customer representation returned by every read and write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerView {
    pub id: DbId,
    pub full_name: String,
    pub primary_address: String,
    pub plan: Plan,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a customer.
///
/// `access_code` is optional here so that a missing code is classified by
/// the rules as an invalid code rather than rejected by the deserializer.
#[derive(Clone, Deserialize, Validate)]
pub struct CreateCustomer {
    #[validate(length(min = 1, max = 255, message = "full_name must be 1-255 characters"))]
    pub full_name: String,
    #[serde(default)]
    pub primary_address: String,
    pub plan: Plan,
    pub access_code: Option<String>,
}

/// DTO for editing a customer.
///
/// `full_name`, `primary_address` and `plan` replace the stored values;
/// `access_code` rotates the code only when present.
#[derive(Clone, Deserialize, Validate)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, max = 255, message = "full_name must be 1-255 characters"))]
    pub full_name: String,
    #[serde(default)]
    pub primary_address: String,
    pub plan: Plan,
    pub access_code: Option<String>,
}

impl fmt::Debug for CreateCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateCustomer")
            .field("full_name", &self.full_name)
            .field("primary_address", &self.primary_address)
            .field("plan", &self.plan)
            .field("access_code", &self.access_code.as_ref().map(|_| "******"))
            .finish()
    }
}

impl fmt::Debug for UpdateCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateCustomer")
            .field("full_name", &self.full_name)
            .field("primary_address", &self.primary_address)
            .field("plan", &self.plan)
            .field("access_code", &self.access_code.as_ref().map(|_| "******"))
            .finish()
    }
}

/// Validated input handed to [`crate::store::CustomerStore::create`].
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub full_name: String,
    pub primary_address: String,
    pub plan: Plan,
    pub access_code: AccessCode,
}

/// Validated replacement values for [`crate::store::CustomerStore::update_if_code`].
#[derive(Debug, Clone)]
pub struct CustomerChanges {
    pub full_name: String,
    pub primary_address: String,
    pub plan: Plan,
    /// `None` keeps the stored code.
    pub access_code: Option<AccessCode>,
}
