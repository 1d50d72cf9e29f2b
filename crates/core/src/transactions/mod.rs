//! Transactions module - domain models, services, and traits.

mod transactions_constants;
mod transactions_model;
mod transactions_service;
mod transactions_traits;


#[cfg(test)]
mod transactions_service_tests;

pub use transactions_constants::*;
pub use transactions_model::{NewTransaction, Transaction, TransactionKind, TransactionUpdate};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
