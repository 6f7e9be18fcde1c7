//! Request handlers.
//!
//! Handlers are thin: they extract input, call the matching rule component
//! in `wallet_core::rules` with the stores from [`AppState`](crate::state::AppState),
//! and let [`AppError`](crate::error::AppError) shape failures.

pub mod asset;
pub mod catalog;
pub mod customer;
