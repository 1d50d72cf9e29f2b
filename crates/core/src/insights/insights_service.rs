use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::budgets::{Budget, BudgetPeriod, BudgetRepositoryTrait};
use crate::categories::Category;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionRepositoryTrait};

use super::insights_model::{BudgetComparison, CategoryTotal, MonthlyExpense, SummaryStatistics};
use super::insights_traits::InsightsServiceTrait;

/// Sums expense amounts per (month, year), ascending by calendar time.
///
/// Income transactions are ignored; months without expenses are not
/// synthesized, so a budgeted-but-unspent month simply does not appear.
pub fn monthly_expense_totals(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut totals: BTreeMap<BudgetPeriod, Decimal> = BTreeMap::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        *totals
            .entry(BudgetPeriod::from_date(transaction.date))
            .or_insert(Decimal::ZERO) += transaction.amount;
    }
    totals
        .into_iter()
        .map(|(period, total)| MonthlyExpense {
            period: period.to_string(),
            total,
        })
        .collect()
}

/// Sums expense amounts per category across all time.
///
/// Only categories with at least one expense appear; rows keep the order in
/// which each category was first seen.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match totals
            .iter_mut()
            .find(|row| row.category == transaction.category)
        {
            Some(row) => row.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category,
                total: transaction.amount,
            }),
        }
    }
    totals
}

/// Headline statistics relative to `reference_date`'s calendar month.
pub fn summary_statistics(
    transactions: &[Transaction],
    reference_date: NaiveDate,
) -> SummaryStatistics {
    let current_period = BudgetPeriod::from_date(reference_date);

    let mut total_expenses = Decimal::ZERO;
    let mut current_month_expenses = Decimal::ZERO;
    let mut highest: Option<(Category, Decimal)> = None;

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        total_expenses += transaction.amount;
        if current_period.contains(transaction.date) {
            current_month_expenses += transaction.amount;
            // Single largest current-month expense wins; first one seen keeps ties.
            let beats_current = highest
                .map(|(_, amount)| transaction.amount > amount)
                .unwrap_or(true);
            if beats_current {
                highest = Some((transaction.category, transaction.amount));
            }
        }
    }

    // Divide by the month's full day count, never by elapsed days; zero when
    // the month has no expenses at all.
    let average_daily_spending = if current_month_expenses.is_zero() {
        Decimal::ZERO
    } else {
        (current_month_expenses / Decimal::from(current_period.days_in_month()))
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    };

    SummaryStatistics {
        total_expenses,
        current_month_expenses,
        average_daily_spending,
        highest_expense_category: highest.map(|(category, _)| category),
    }
}

/// Builds the budget-vs-actual grid for one period.
///
/// Exactly one row per category in `Category::ALL` order, zero-filled when a
/// category has no budget or no spending.
pub fn budget_vs_actual(
    transactions: &[Transaction],
    budgets: &[Budget],
    period: BudgetPeriod,
) -> Vec<BudgetComparison> {
    Category::ALL
        .iter()
        .map(|&category| {
            let budget_amount = budgets
                .iter()
                .find(|b| b.category == category && b.matches_period(&period))
                .map(|b| b.amount)
                .unwrap_or(Decimal::ZERO);
            let actual_amount = transactions
                .iter()
                .filter(|t| {
                    t.is_expense() && t.category == category && period.contains(t.date)
                })
                .map(|t| t.amount)
                .sum();
            BudgetComparison {
                category,
                budget_amount,
                actual_amount,
            }
        })
        .collect()
}

/// Read-side facade over the two repositories.
///
/// Fetches the input collections, then delegates to the pure functions above.
pub struct InsightsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl InsightsService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        InsightsService {
            transaction_repository,
            budget_repository,
        }
    }
}

impl InsightsServiceTrait for InsightsService {
    fn get_monthly_expense_totals(&self) -> Result<Vec<MonthlyExpense>> {
        let transactions = self.transaction_repository.get_transactions()?;
        Ok(monthly_expense_totals(&transactions))
    }

    fn get_category_totals(&self) -> Result<Vec<CategoryTotal>> {
        let transactions = self.transaction_repository.get_transactions()?;
        Ok(category_totals(&transactions))
    }

    fn get_summary_statistics(&self, reference_date: NaiveDate) -> Result<SummaryStatistics> {
        debug!("Computing summary statistics as of {}", reference_date);
        let transactions = self.transaction_repository.get_transactions()?;
        Ok(summary_statistics(&transactions, reference_date))
    }

    fn get_budget_vs_actual(&self, period: BudgetPeriod) -> Result<Vec<BudgetComparison>> {
        let transactions = self.transaction_repository.get_transactions()?;
        let budgets = self.budget_repository.get_budgets(period)?;
        Ok(budget_vs_actual(&transactions, &budgets, period))
    }
}
