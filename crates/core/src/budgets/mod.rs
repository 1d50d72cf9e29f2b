//! Budgets module - the monthly per-category budget ledger.

mod budgets_model;
mod budgets_service;
mod budgets_traits;



pub use budgets_model::{Budget, BudgetPeriod, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
