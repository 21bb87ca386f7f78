//! Chart of accounts, classification, and normal balances.
//!
//! Account names are free-form strings on ledger entries; this module maps
//! them onto the GAAP-like hierarchy (main category, sub category) and
//! resolves each main category's normal balance side.

mod chart;

pub use chart::{AccountDef, ChartOfAccounts, ACCOUNTS_PAYABLE, BANK, COST_OF_SALES,
    DISTRIBUTIONS, RENTAL_INCOME, UNCATEGORIZED};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level GAAP bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainCategory {
    /// Asset accounts (debit-normal).
    Assets,
    /// Liability accounts (credit-normal).
    Liabilities,
    /// Equity accounts (credit-normal).
    Equity,
    /// Revenue accounts (credit-normal).
    Revenue,
    /// Expense accounts (debit-normal).
    Expenses,
    /// Sentinel for accounts absent from the registry.
    Uncategorized,
}

impl MainCategory {
    /// Returns the normal balance side, or `None` for the sentinel.
    #[must_use]
    pub const fn normal_balance(self) -> Option<NormalBalance> {
        match self {
            Self::Assets | Self::Expenses => Some(NormalBalance::Debit),
            Self::Liabilities | Self::Equity | Self::Revenue => Some(NormalBalance::Credit),
            Self::Uncategorized => None,
        }
    }
}

impl std::fmt::Display for MainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assets => "Assets",
            Self::Liabilities => "Liabilities",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expenses => "Expenses",
            Self::Uncategorized => "Uncategorized",
        };
        write!(f, "{name}")
    }
}

/// Whether an account's natural increase is a debit or a credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal (assets, expenses).
    Debit,
    /// Credit-normal (liabilities, equity, revenue).
    Credit,
}

impl NormalBalance {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Debit => Self::Credit,
            Self::Credit => Self::Debit,
        }
    }
}

/// The (main category, sub category) pair resolved for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Top-level bucket.
    pub main_category: MainCategory,
    /// Second-level classification within the bucket.
    pub sub_category: &'static str,
}

/// Error raised by strict classification lookups.
///
/// The classifier itself never fails; this error only surfaces from
/// `signed_amount`/`normal_balance`, where an unregistered account cannot
/// be given a sign.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    /// Account name absent from the registry.
    #[error("Unknown account: {0}")]
    UnknownAccount(String),
}
