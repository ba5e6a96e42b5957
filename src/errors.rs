use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error type that captures every ledger failure surfaced to callers.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Rejected input at transaction construction. The store is untouched.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    /// The backing store exists but could not be read into a ledger.
    #[error("ledger store `{location}` is corrupt: {reason}")]
    StoreCorrupt { location: String, reason: String },
    /// The snapshot could not be written; the previous snapshot stays authoritative.
    #[error("failed to persist ledger to `{location}`: {reason}")]
    Persist { location: String, reason: String },
}

impl LedgerError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn corrupt(location: impl Into<String>, reason: impl ToString) -> Self {
        LedgerError::StoreCorrupt {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn persist(location: impl Into<String>, reason: impl ToString) -> Self {
        LedgerError::Persist {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LedgerError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Failures reading or writing the preference file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A `config set` key or value that cannot be applied.
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
