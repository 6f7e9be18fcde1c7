//! Database row types.
//!
//! Enum columns are stored as `TEXT` and parsed into core enums on the way
//! out; a value the core does not recognise is reported as a backend error.

pub mod asset;
pub mod customer;
