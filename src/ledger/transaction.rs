use std::{fmt, str::FromStr};

use chrono::{Local, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Interchange format for transaction timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Discriminates money coming in from money going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Integer tag used by legacy exports (0 = expense, 1 = income).
    pub fn code(self) -> u8 {
        match self {
            TransactionKind::Expense => 0,
            TransactionKind::Income => 1,
        }
    }

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(TransactionKind::Expense),
            1 => Ok(TransactionKind::Income),
            other => Err(LedgerError::validation(
                "kind",
                format!("unknown transaction type code {other}"),
            )),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            other => Err(LedgerError::validation(
                "kind",
                format!("`{other}` is neither income nor expense"),
            )),
        }
    }
}

/// One recorded monetary event. Immutable once constructed.
///
/// `amount` is a non-negative magnitude; the sign comes from `kind`.
/// `category` and `description` are normalized exactly once, in [`Transaction::new`].
/// Deserialized records are validated but keep their stored text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    amount: Decimal,
    kind: TransactionKind,
    category: String,
    description: String,
    #[serde(with = "timestamp")]
    created_at: NaiveDateTime,
}

impl Transaction {
    /// Validates and normalizes raw input. `created_at` defaults to the current
    /// local time and is truncated to whole seconds either way.
    pub fn new(
        amount: Decimal,
        category: &str,
        kind: TransactionKind,
        description: &str,
        created_at: Option<NaiveDateTime>,
    ) -> Result<Self> {
        ensure_non_negative(amount)?;
        let created_at = created_at.unwrap_or_else(|| Local::now().naive_local());
        Ok(Self {
            amount,
            kind,
            category: title_case(category),
            description: description.to_lowercase(),
            created_at: truncate_to_seconds(created_at),
        })
    }

    pub fn income(amount: Decimal, category: &str, description: &str) -> Result<Self> {
        Self::new(amount, category, TransactionKind::Income, description, None)
    }

    pub fn expense(amount: Decimal, category: &str, description: &str) -> Result<Self> {
        Self::new(amount, category, TransactionKind::Expense, description, None)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// `amount` with the sign implied by `kind`.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn created_at_label(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Wire shape of a persisted transaction, checked before it becomes a [`Transaction`].
#[derive(Deserialize)]
struct TransactionRecord {
    amount: Decimal,
    kind: TransactionKind,
    category: String,
    description: String,
    #[serde(with = "timestamp")]
    created_at: NaiveDateTime,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: TransactionRecord) -> Result<Self> {
        ensure_non_negative(record.amount)?;
        Ok(Self {
            amount: record.amount,
            kind: record.kind,
            category: record.category,
            description: record.description,
            created_at: record.created_at,
        })
    }
}

/// Parses a timestamp in [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|err| {
        LedgerError::validation(
            "created_at",
            format!("`{raw}` does not match YYYY-MM-DD HH:MM:SS ({err})"),
        )
    })
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Any non-alphabetic character starts a new word.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

fn ensure_non_negative(amount: Decimal) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::validation(
            "amount",
            format!("{amount} is negative; use the transaction kind for direction"),
        ));
    }
    Ok(())
}

fn truncate_to_seconds(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}

pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
