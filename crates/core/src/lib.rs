//! Wallet domain core.
//!
//! Holds the business rules for assets and customers, the store traits they
//! run against, and an in-memory store. Has no knowledge of HTTP or SQL.

pub mod access_code;
pub mod error;
pub mod models;
pub mod plan;
pub mod rules;
pub mod store;
pub mod types;
pub mod variation;
