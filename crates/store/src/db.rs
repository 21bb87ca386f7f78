//! The in-memory database.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentfolio_core::budget::Budget;
use rentfolio_core::ledger::LedgerEntry;
use rentfolio_shared::types::{OwnerId, PropertyId};
use rentfolio_shared::{AppError, AppResult};

/// A rental property record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Property ID.
    pub id: PropertyId,
    /// Owning tenant.
    pub owner_id: OwnerId,
    /// Display title.
    pub title: String,
    /// Assessed value for property-tax computation.
    pub assessed_value: Option<Decimal>,
    /// Property tax rate in percent.
    pub tax_rate_percent: Option<Decimal>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A budget row tied to its owner.
///
/// Portfolio-scoped budgets have no property to derive ownership from,
/// so the owner is stored on the row itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRow {
    /// Owning tenant.
    pub owner_id: OwnerId,
    /// The budget record.
    pub budget: Budget,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub ledger: Vec<LedgerEntry>,
    pub properties: Vec<Property>,
    pub budgets: Vec<BudgetRow>,
}

/// In-memory tables behind a single lock.
///
/// A write lock spans every multi-row mutation, so the poster's two-leg
/// insert commits both rows or neither.
#[derive(Debug, Default)]
pub struct Database {
    tables: RwLock<Tables>,
}

impl Database {
    /// Creates an empty database handle.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| AppError::Database("table lock poisoned".to_owned()))
    }

    pub(crate) fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| AppError::Database("table lock poisoned".to_owned()))
    }
}
