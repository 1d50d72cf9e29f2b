use std::sync::Arc;

use crate::errors::Result;

use super::budgets_model::{Budget, BudgetPeriod, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use async_trait::async_trait;

/// Service for the budget ledger.
///
/// Keeps at most one budget per (category, month, year); repeated upserts for
/// the same key overwrite the amount.
pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(budget_repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { budget_repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self, period: BudgetPeriod) -> Result<Vec<Budget>> {
        self.budget_repository.get_budgets(period)
    }

    async fn upsert_budget(&self, new_budget: NewBudget, period: BudgetPeriod) -> Result<Budget> {
        new_budget.validate()?;
        let stored = self
            .budget_repository
            .upsert_budget(new_budget, period)
            .await?;
        log::debug!(
            "Set budget for {} in {}: {}",
            stored.category,
            period,
            stored.amount
        );
        Ok(stored)
    }
}
