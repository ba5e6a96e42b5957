//! Reader for the legacy JSON export format.
//!
//! Shape: `{ "total": n, "transactions": [ { "amount", "creation_datetime",
//! "transaction_type", "category", "description" } ] }` with
//! `transaction_type` 0 for expenses and 1 for income. The stored `total` is
//! ignored; balances are always re-derived from the records.

use std::{fs, path::Path, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Number;

use crate::{
    errors::{LedgerError, Result},
    ledger::{parse_timestamp, Transaction, TransactionKind},
};

#[derive(Debug, Deserialize)]
pub struct LegacyExport {
    #[serde(default)]
    pub total: Option<Number>,
    pub transactions: Vec<LegacyRecord>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyRecord {
    pub amount: Number,
    pub creation_datetime: String,
    pub transaction_type: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl LegacyExport {
    pub fn from_path(path: &Path) -> Result<Self> {
        let location = path.display().to_string();
        let data = fs::read_to_string(path).map_err(|err| LedgerError::corrupt(&location, err))?;
        Self::parse(&data, &location)
    }

    pub fn parse(raw: &str, location: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| LedgerError::corrupt(location, err))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Builds validated, normalized transactions in export order. The first
    /// invalid record aborts the conversion.
    pub fn into_transactions(self) -> Result<Vec<Transaction>> {
        self.transactions
            .into_iter()
            .enumerate()
            .map(|(idx, record)| record.into_transaction().map_err(|err| at_record(idx, err)))
            .collect()
    }
}

impl LegacyRecord {
    fn into_transaction(self) -> Result<Transaction> {
        let amount = decimal_from_number(&self.amount)?;
        let kind = TransactionKind::from_code(self.transaction_type)?;
        let created_at = parse_timestamp(&self.creation_datetime)?;
        Transaction::new(
            amount,
            &self.category,
            kind,
            &self.description,
            Some(created_at),
        )
    }
}

fn decimal_from_number(number: &Number) -> Result<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|err| LedgerError::validation("amount", format!("`{text}` is not a decimal ({err})")))
}

fn at_record(idx: usize, err: LedgerError) -> LedgerError {
    match err {
        LedgerError::Validation { field, reason } => {
            LedgerError::validation(field, format!("record {}: {reason}", idx + 1))
        }
        other => other,
    }
}
