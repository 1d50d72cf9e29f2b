//! SpendTrack Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for SpendTrack.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod budgets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod insights;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
