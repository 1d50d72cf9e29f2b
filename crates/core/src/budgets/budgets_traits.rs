use crate::budgets::budgets_model::{Budget, BudgetPeriod, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// All budgets for the given period; ordering unspecified.
    fn get_budgets(&self, period: BudgetPeriod) -> Result<Vec<Budget>>;

    /// Insert-or-overwrite by (category, month, year) in a single atomic
    /// statement. Afterwards exactly one budget exists for that key.
    async fn upsert_budget(&self, new_budget: NewBudget, period: BudgetPeriod) -> Result<Budget>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self, period: BudgetPeriod) -> Result<Vec<Budget>>;
    async fn upsert_budget(&self, new_budget: NewBudget, period: BudgetPeriod) -> Result<Budget>;
}
