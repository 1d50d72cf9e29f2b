use chrono::{Local, NaiveDate};
use serde::Deserialize;
use spendtrack_core::budgets::BudgetPeriod;
use spendtrack_core::errors::ValidationError;
use spendtrack_core::transactions::TRANSACTION_DATE_FORMAT;

/// Optional period selector; omitted parts fall back to the current month.
#[derive(Deserialize)]
pub struct PeriodQuery {
    pub month: Option<String>,
    pub year: Option<i32>,
}

impl PeriodQuery {
    pub fn resolve(&self) -> std::result::Result<BudgetPeriod, ValidationError> {
        let current = BudgetPeriod::from_date(Local::now().date_naive());
        match (&self.month, self.year) {
            (Some(label), Some(year)) => BudgetPeriod::from_parts(label, year),
            (Some(label), None) => BudgetPeriod::from_parts(label, current.year),
            (None, Some(year)) => Ok(BudgetPeriod {
                year,
                month: current.month,
            }),
            (None, None) => Ok(current),
        }
    }
}

/// Optional reference date for summary statistics; defaults to today.
#[derive(Deserialize)]
pub struct SummaryQuery {
    pub date: Option<String>,
}

impl SummaryQuery {
    pub fn resolve(&self) -> std::result::Result<NaiveDate, ValidationError> {
        match &self.date {
            Some(raw) => Ok(NaiveDate::parse_from_str(raw, TRANSACTION_DATE_FORMAT)?),
            None => Ok(Local::now().date_naive()),
        }
    }
}
