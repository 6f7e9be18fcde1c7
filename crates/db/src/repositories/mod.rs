//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod customer_repo;

pub use asset_repo::AssetRepo;
pub use customer_repo::CustomerRepo;
