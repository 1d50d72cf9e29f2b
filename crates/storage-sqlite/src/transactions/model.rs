//! Database models for transactions.

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use spendtrack_core::categories::Category;
use spendtrack_core::transactions::{
    NewTransaction, Transaction, TransactionKind, TransactionUpdate, TRANSACTION_DATE_FORMAT,
};

use crate::utils::parse_decimal_string_tolerant;

/// Database model for transactions
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
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub kind: String,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to the domain model. The CHECK constraints keep category and
// kind well-formed in practice; the fallbacks cover hand-edited databases.
impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            amount: parse_decimal_string_tolerant(&db.amount, "amount"),
            category: Category::from_str(&db.category).unwrap_or_else(|e| {
                log::warn!("{}; defaulting to Others", e);
                Category::Others
            }),
            date: NaiveDate::parse_from_str(&db.date, TRANSACTION_DATE_FORMAT).unwrap_or_else(
                |e| {
                    log::error!("Failed to parse transaction date '{}': {}", db.date, e);
                    Utc::now().date_naive()
                },
            ),
            kind: TransactionKind::from_str(&db.kind).unwrap_or_else(|e| {
                log::warn!("{}; defaulting to expense", e);
                TransactionKind::Expense
            }),
            id: db.id,
            title: db.title,
        }
    }
}

impl From<NewTransaction> for TransactionDB {
    fn from(domain: NewTransaction) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            // The repository assigns the id right before insert.
            id: String::new(),
            title: domain.title,
            amount: domain.amount.to_string(),
            category: domain.category,
            date: domain.date,
            kind: domain.kind,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<TransactionUpdate> for TransactionDB {
    fn from(domain: TransactionUpdate) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: domain.id,
            title: domain.title,
            amount: domain.amount.to_string(),
            category: domain.category,
            date: domain.date,
            kind: domain.kind,
            // The repository restores the stored created_at before writing.
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
