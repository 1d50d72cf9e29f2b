//! Insights module - derived spending aggregates.
//!
//! Everything here is computed from the full transaction set plus the budget
//! ledger; nothing is persisted.

mod insights_model;
mod insights_service;
mod insights_traits;



pub use insights_model::{BudgetComparison, CategoryTotal, MonthlyExpense, SummaryStatistics};
pub use insights_service::{
    budget_vs_actual, category_totals, monthly_expense_totals, summary_statistics, InsightsService,
};
pub use insights_traits::InsightsServiceTrait;
