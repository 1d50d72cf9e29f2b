//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::categories::Category;
use crate::errors::ValidationError;
use crate::transactions::transactions_constants::*;

/// Whether a transaction adds to or draws from the user's money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => TRANSACTION_KIND_INCOME,
            TransactionKind::Expense => TRANSACTION_KIND_EXPENSE,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, TransactionKind::Expense)
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == TRANSACTION_KIND_INCOME => Ok(TransactionKind::Income),
            s if s == TRANSACTION_KIND_EXPENSE => Ok(TransactionKind::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing a recorded transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// True when this transaction counts toward spending aggregates.
    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

/// Input model for creating a new transaction.
///
/// Category, date, and kind arrive as strings from the boundary and are
/// checked by [`NewTransaction::validate`] before anything is stored.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewTransaction {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_transaction_fields(&self.title, self.amount, &self.category, &self.date, &self.kind)
    }
}

/// Input model for replacing an existing transaction's fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TransactionUpdate {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }
        validate_transaction_fields(&self.title, self.amount, &self.category, &self.date, &self.kind)
    }
}

/// Structural checks shared by create and update.
fn validate_transaction_fields(
    title: &str,
    amount: Decimal,
    category: &str,
    date: &str,
    kind: &str,
) -> std::result::Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()));
    }
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "Amount must be greater than zero".to_string(),
        ));
    }
    Category::from_str(category).map_err(ValidationError::InvalidInput)?;
    TransactionKind::from_str(kind).map_err(ValidationError::InvalidInput)?;
    NaiveDate::parse_from_str(date, TRANSACTION_DATE_FORMAT)?;
    Ok(())
}
