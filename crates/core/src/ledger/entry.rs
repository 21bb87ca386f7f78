//! Ledger entry domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentfolio_shared::types::{LedgerEntryId, OwnerId, PropertyId};

use crate::accounts::{ChartOfAccounts, MainCategory};

/// A single ledger entry (one leg of a transaction).
///
/// `main_category` and `sub_category` are denormalized copies of the
/// registry classification taken when the entry was created or last
/// edited. If the registry changes afterwards they may drift; that drift
/// is accepted, not corrected retroactively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    pub id: LedgerEntryId,
    /// Calendar date of the underlying transaction.
    pub transaction_date: NaiveDate,
    /// Signed amount: positive increases the normal-balance side of the
    /// account, negative decreases it.
    pub amount: Decimal,
    /// Account name, a key into the chart of accounts.
    pub account: String,
    /// Denormalized top-level bucket.
    pub main_category: MainCategory,
    /// Denormalized second-level classification.
    pub sub_category: String,
    /// Free-text description.
    pub description: Option<String>,
    /// External reference (invoice number, cheque number).
    pub reference_number: Option<String>,
    /// Owning tenant.
    pub owner_id: OwnerId,
    /// Associated property; `None` for portfolio-level entries.
    pub property_id: Option<PropertyId>,
    /// Only reconciled entries participate in statement aggregation.
    pub is_reconciled: bool,
    /// Manually verified by the owner.
    pub is_verified: bool,
    /// Portfolio-level entry not tied to a single property.
    pub is_portfolio: bool,
    /// Generated by the property-tax recording flow.
    pub is_property_tax: bool,
    /// When the entry was first recorded.
    pub processed_date: DateTime<Utc>,
    /// When the entry was last edited.
    pub last_modified: DateTime<Utc>,
}

impl LedgerEntry {
    /// Re-derives the classification from the current account name.
    ///
    /// Called after an edit changes `account`; an unregistered name
    /// resolves to the `Uncategorized` sentinel rather than failing.
    pub fn reclassify(&mut self, chart: &ChartOfAccounts) {
        let c = chart.classify(&self.account);
        self.main_category = c.main_category;
        self.sub_category = c.sub_category.to_owned();
        self.last_modified = Utc::now();
    }
}

/// Input form for creating a ledger entry.
///
/// Classification and timestamps are derived at creation; the amount is
/// already signed (the poster applies the sign convention before building
/// these).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLedgerEntry {
    /// Calendar date of the underlying transaction.
    pub transaction_date: NaiveDate,
    /// Signed amount.
    pub amount: Decimal,
    /// Account name.
    pub account: String,
    /// Free-text description.
    pub description: Option<String>,
    /// External reference.
    pub reference_number: Option<String>,
    /// Owning tenant.
    pub owner_id: OwnerId,
    /// Associated property, if any.
    pub property_id: Option<PropertyId>,
    /// Reconciliation flag.
    pub is_reconciled: bool,
    /// Verification flag.
    pub is_verified: bool,
    /// Portfolio-level flag.
    pub is_portfolio: bool,
    /// Property-tax flow flag.
    pub is_property_tax: bool,
}

impl NewLedgerEntry {
    /// Materializes a full entry, deriving classification from the chart.
    #[must_use]
    pub fn into_entry(self, chart: &ChartOfAccounts) -> LedgerEntry {
        let c = chart.classify(&self.account);
        let now = Utc::now();
        LedgerEntry {
            id: LedgerEntryId::new(),
            transaction_date: self.transaction_date,
            amount: self.amount,
            account: self.account,
            main_category: c.main_category,
            sub_category: c.sub_category.to_owned(),
            description: self.description,
            reference_number: self.reference_number,
            owner_id: self.owner_id,
            property_id: self.property_id,
            is_reconciled: self.is_reconciled,
            is_verified: self.is_verified,
            is_portfolio: self.is_portfolio,
            is_property_tax: self.is_property_tax,
            processed_date: now,
            last_modified: now,
        }
    }
}
