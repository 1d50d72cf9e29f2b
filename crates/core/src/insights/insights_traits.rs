use chrono::NaiveDate;

use crate::budgets::BudgetPeriod;
use crate::errors::Result;
use crate::insights::insights_model::{
    BudgetComparison, CategoryTotal, MonthlyExpense, SummaryStatistics,
};

/// Trait for the insight read-side.
///
/// Reference dates and periods are explicit parameters; "now" defaulting
/// belongs to the caller at the boundary, never in here.
pub trait InsightsServiceTrait: Send + Sync {
    fn get_monthly_expense_totals(&self) -> Result<Vec<MonthlyExpense>>;
    fn get_category_totals(&self) -> Result<Vec<CategoryTotal>>;
    fn get_summary_statistics(&self, reference_date: NaiveDate) -> Result<SummaryStatistics>;
    fn get_budget_vs_actual(&self, period: BudgetPeriod) -> Result<Vec<BudgetComparison>>;
}
