//! Value types produced by the aggregator and consumed by renderers.

use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Totals and counts over a transaction set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income_total: Decimal,
    pub income_count: usize,
    pub expense_total: Decimal,
    pub expense_count: usize,
    pub balance: Decimal,
}

/// Calendar bucket used by the monthly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(timestamp: NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub income_total: Decimal,
    pub expense_total: Decimal,
}

impl MonthTotals {
    pub fn net(&self) -> Decimal {
        self.income_total - self.expense_total
    }
}

/// One slice of a per-category breakdown, with its share of the kind's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Decimal,
    pub share_percent: Decimal,
}
