//! Domain records and DTOs.
//!
//! Each submodule contains:
//! - The stored record returned by store adapters
//! - A `Deserialize` create DTO accepted at the boundary
//! - The store-facing input types the rules build from those DTOs

pub mod asset;
pub mod customer;
