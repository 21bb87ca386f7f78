//! Error types for ledger operations.

use thiserror::Error;

use crate::accounts::ClassificationError;

/// Errors that can occur while posting to the ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Primary account is not in the registry; no sign can be assigned.
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    /// No balancing rule exists for the primary account's category.
    /// The whole post fails; no partial entry may be persisted.
    #[error("No balancing rule for account '{account}' (category {main_category})")]
    Unbalanceable {
        /// The primary account name.
        account: String,
        /// Its resolved main category, rendered for the message.
        main_category: String,
    },
}

impl From<ClassificationError> for LedgerError {
    fn from(err: ClassificationError) -> Self {
        match err {
            ClassificationError::UnknownAccount(name) => Self::UnknownAccount(name),
        }
    }
}

impl LedgerError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAccount(_) => "LEDGER_UNKNOWN_ACCOUNT",
            Self::Unbalanceable { .. } => "LEDGER_UNBALANCEABLE",
        }
    }
}
