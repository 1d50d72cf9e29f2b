//! Insight row types - the shapes the aggregation functions produce.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// One month's expense total, labelled like "Aug 2025".
///
/// Only months with at least one expense transaction are ever produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    pub period: String,
    pub total: Decimal,
}

/// All-time expense total for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Headline numbers for the dashboard.
///
/// `highest_expense_category` is `None` when the reference month has no
/// expenses; on the wire that is the sentinel string "None", which callers
/// must treat as "no data" rather than a real category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub total_expenses: Decimal,
    pub current_month_expenses: Decimal,
    pub average_daily_spending: Decimal,
    #[serde(with = "category_sentinel")]
    pub highest_expense_category: Option<Category>,
}

/// One row of the budget-vs-actual grid.
///
/// The grid always carries exactly one row per category in the fixed
/// enumeration order, with zero amounts where nothing was budgeted or spent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    pub category: Category,
    pub budget_amount: Decimal,
    pub actual_amount: Decimal,
}

/// Serializes an optional category as its name, with "None" as the
/// no-data sentinel.
mod category_sentinel {
    use super::Category;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    const NO_DATA: &str = "None";

    pub fn serialize<S>(value: &Option<Category>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(category) => serializer.serialize_str(category.as_str()),
            None => serializer.serialize_str(NO_DATA),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == NO_DATA {
            return Ok(None);
        }
        Category::from_str(&raw).map(Some).map_err(de::Error::custom)
    }
}
