//! Database models for budgets.

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use spendtrack_core::budgets::{Budget, BudgetPeriod, NewBudget};
use spendtrack_core::categories::Category;

use crate::utils::parse_decimal_string_tolerant;

/// Database model for budgets
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub category: String,
    pub amount: String,
    pub month: String,
    pub year: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl BudgetDB {
    /// Builds the row for an upsert of `new_budget` into `period`.
    pub fn from_new(new_budget: NewBudget, period: BudgetPeriod) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            // Kept only when the insert arm of the upsert wins; the
            // repository assigns it right before the statement runs.
            id: String::new(),
            category: new_budget.category,
            amount: new_budget.amount.to_string(),
            month: period.label().to_string(),
            year: period.year,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            amount: parse_decimal_string_tolerant(&db.amount, "amount"),
            category: Category::from_str(&db.category).unwrap_or_else(|e| {
                log::warn!("{}; defaulting to Others", e);
                Category::Others
            }),
            id: db.id,
            month: db.month,
            year: db.year,
        }
    }
}
