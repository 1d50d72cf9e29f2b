//! Budget domain models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::categories::Category;
use crate::constants::MONTH_LABELS;
use crate::errors::ValidationError;

/// A calendar month in a given year, the scoping unit of the budget ledger.
///
/// `month` is 1-12. Ordering follows calendar time (field order matters for
/// the derived `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub year: i32,
    pub month: u32,
}

impl BudgetPeriod {
    pub fn from_date(date: NaiveDate) -> Self {
        BudgetPeriod {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Builds a period from a short month label ("Aug") and a year.
    pub fn from_parts(label: &str, year: i32) -> std::result::Result<Self, ValidationError> {
        let month = MONTH_LABELS
            .iter()
            .position(|m| *m == label)
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!("Unknown month label: {}", label))
            })?;
        Ok(BudgetPeriod {
            year,
            month: month as u32 + 1,
        })
    }

    /// The short month label ("Jan" .. "Dec").
    pub fn label(&self) -> &'static str {
        MONTH_LABELS[(self.month.clamp(1, 12) - 1) as usize]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Number of calendar days in this month.
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month >= 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map(|last_day| last_day.day())
            .unwrap_or(30)
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.year)
    }
}

/// Domain model representing one category's spending ceiling for one period.
///
/// The (category, month, year) triple is the entity's true identity; `id` is
/// incidental. `month` is the short label form ("Aug").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: Category,
    pub amount: Decimal,
    pub month: String,
    pub year: i32,
}

impl Budget {
    pub fn matches_period(&self, period: &BudgetPeriod) -> bool {
        self.month == period.label() && self.year == period.year
    }
}

/// Input model for setting a category's budget.
///
/// The target period is not part of the input; the caller supplies it
/// explicitly (the boundary defaults it to the current month).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: String,
    pub amount: Decimal,
}

impl NewBudget {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()));
        }
        Category::from_str(&self.category).map_err(ValidationError::InvalidInput)?;
        // A zero ceiling is a valid budget; only negative amounts are rejected.
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Amount must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
