//! Ledger repository.
//!
//! All reads and writes are scoped to one owner; rows belonging to other
//! owners behave as if they do not exist.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use rentfolio_core::accounts::MainCategory;
use rentfolio_core::ledger::{
    expense_summary, ExpenseSummary, LedgerEntry, NewLedgerEntry, PostedPair, PostingInput,
    PostingService,
};
use rentfolio_shared::types::money::round2;
use rentfolio_shared::types::{DateRange, LedgerEntryId, OwnerId, PageRequest, PageResponse, PropertyId};
use rentfolio_shared::{AppError, AppResult};

use crate::db::Database;

/// Sort key for expense listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseSort {
    /// Transaction date.
    #[default]
    Date,
    /// Entry amount.
    Amount,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

/// Filters for the expense listing.
#[derive(Debug, Clone, Default)]
pub struct ExpenseQuery {
    /// Restrict to a date range (end inclusive).
    pub range: Option<DateRange>,
    /// Restrict to one account name.
    pub account: Option<String>,
    /// Sort key.
    pub sort_by: ExpenseSort,
    /// Sort direction.
    pub order: SortOrder,
    /// Pagination.
    pub page: PageRequest,
}

/// Paginated expense rows with the categorized summary.
#[derive(Debug, Clone)]
pub struct ExpenseListing {
    /// The requested page of entries.
    pub transactions: PageResponse<LedgerEntry>,
    /// sub category → account → total, over the whole filtered set.
    pub summary: ExpenseSummary,
}

/// Owner-scoped ledger access and posting.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: Arc<Database>,
    poster: PostingService,
}

impl LedgerRepository {
    /// Creates a repository over the shared database.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            poster: PostingService::new(),
        }
    }

    /// Posts one user leg as a balanced pair and persists both rows
    /// under a single write lock: both commit or neither does.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the posting rules reject the
    /// input; nothing is persisted in that case.
    pub fn post(&self, input: PostingInput) -> AppResult<[LedgerEntryId; 2]> {
        let pair = self
            .poster
            .post(input)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.insert_pair(pair)
    }

    /// Computes and records a property-tax charge for one property:
    /// `assessed_value × tax_rate_percent / 100`, posted as a reconciled
    /// pair flagged `is_property_tax`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for a missing or foreign property and
    /// `AppError::Validation` when the property has no assessment data.
    pub fn record_property_tax(
        &self,
        owner_id: OwnerId,
        property_id: PropertyId,
        transaction_date: NaiveDate,
    ) -> AppResult<[LedgerEntryId; 2]> {
        let (assessed, rate) = {
            let tables = self.db.read()?;
            let property = tables
                .properties
                .iter()
                .find(|p| p.id == property_id && p.owner_id == owner_id)
                .ok_or_else(|| AppError::NotFound(format!("property {property_id}")))?;
            (property.assessed_value, property.tax_rate_percent)
        };
        let (Some(assessed), Some(rate)) = (assessed, rate) else {
            return Err(AppError::Validation(format!(
                "property {property_id} has no tax assessment data"
            )));
        };

        let amount = round2(assessed * rate / Decimal::ONE_HUNDRED);
        let pair = self
            .poster
            .post_property_tax(
                owner_id,
                property_id,
                transaction_date,
                amount,
                Some(format!("Property tax at {rate}% of {assessed}")),
            )
            .map_err(|e| AppError::Validation(e.to_string()))?;

        info!(%property_id, %amount, "recorded property tax charge");
        self.insert_pair(pair)
    }

    /// Inserts a single user-entered or document-derived entry,
    /// deriving its classification from the account name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn create(&self, new: NewLedgerEntry) -> AppResult<LedgerEntryId> {
        let entry = new.into_entry(self.poster.chart());
        let id = entry.id;
        self.db.write()?.ledger.push(entry);
        Ok(id)
    }

    /// Fetches one entry.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn get(&self, owner_id: OwnerId, id: LedgerEntryId) -> AppResult<LedgerEntry> {
        self.db
            .read()?
            .ledger
            .iter()
            .find(|e| e.id == id && e.owner_id == owner_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("ledger entry {id}")))
    }

    /// Replaces an entry's fields, re-deriving the classification from
    /// the (possibly edited) account name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn update(&self, owner_id: OwnerId, mut updated: LedgerEntry) -> AppResult<()> {
        updated.reclassify(self.poster.chart());
        let mut tables = self.db.write()?;
        let row = tables
            .ledger
            .iter_mut()
            .find(|e| e.id == updated.id && e.owner_id == owner_id)
            .ok_or_else(|| AppError::NotFound(format!("ledger entry {}", updated.id)))?;
        updated.processed_date = row.processed_date;
        *row = updated;
        Ok(())
    }

    /// Hard-deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn delete(&self, owner_id: OwnerId, id: LedgerEntryId) -> AppResult<()> {
        let mut tables = self.db.write()?;
        let before = tables.ledger.len();
        tables
            .ledger
            .retain(|e| !(e.id == id && e.owner_id == owner_id));
        if tables.ledger.len() == before {
            return Err(AppError::NotFound(format!("ledger entry {id}")));
        }
        Ok(())
    }

    /// Raw ledger view: every entry regardless of reconciliation,
    /// newest transaction date first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn list(&self, owner_id: OwnerId, page: PageRequest) -> AppResult<PageResponse<LedgerEntry>> {
        let mut entries: Vec<LedgerEntry> = self
            .db
            .read()?
            .ledger
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
        Ok(page.paginate(&entries))
    }

    /// Reconciled entries with a transaction date inside the range.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn reconciled_in_range(
        &self,
        owner_id: OwnerId,
        range: DateRange,
    ) -> AppResult<Vec<LedgerEntry>> {
        Ok(self
            .db
            .read()?
            .ledger
            .iter()
            .filter(|e| {
                e.owner_id == owner_id && e.is_reconciled && range.contains(e.transaction_date)
            })
            .cloned()
            .collect())
    }

    /// Summed reconciled balance of one account dated strictly before
    /// the boundary.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn balance_before(
        &self,
        owner_id: OwnerId,
        account: &str,
        boundary: NaiveDate,
    ) -> AppResult<Decimal> {
        Ok(self
            .db
            .read()?
            .ledger
            .iter()
            .filter(|e| {
                e.owner_id == owner_id
                    && e.is_reconciled
                    && e.account == account
                    && e.transaction_date < boundary
            })
            .map(|e| e.amount)
            .sum())
    }

    /// Accumulated retained earnings strictly before the boundary:
    /// revenue less expenses less distributions, over all reconciled
    /// history. Feeds the since-inception balance sheet basis.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn retained_earnings_before(
        &self,
        owner_id: OwnerId,
        boundary: NaiveDate,
    ) -> AppResult<Decimal> {
        let chart = self.poster.chart();
        let tables = self.db.read()?;
        let mut total = Decimal::ZERO;
        for e in tables.ledger.iter().filter(|e| {
            e.owner_id == owner_id && e.is_reconciled && e.transaction_date < boundary
        }) {
            match chart.classify(&e.account).main_category {
                MainCategory::Revenue => total += e.amount,
                MainCategory::Expenses => total -= e.amount,
                _ => {}
            }
            if e.account == "Distributions" {
                total -= e.amount;
            }
        }
        Ok(total)
    }

    /// Expense listing for one property: filtered rows, sorted and
    /// paginated, plus the nested category summary over the whole
    /// filtered set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn expenses(
        &self,
        owner_id: OwnerId,
        property_id: PropertyId,
        query: &ExpenseQuery,
    ) -> AppResult<ExpenseListing> {
        let chart = self.poster.chart();
        let mut filtered: Vec<LedgerEntry> = self
            .db
            .read()?
            .ledger
            .iter()
            .filter(|e| {
                e.owner_id == owner_id
                    && e.property_id == Some(property_id)
                    && chart.classify(&e.account).main_category == MainCategory::Expenses
                    && query
                        .range
                        .map_or(true, |r| r.contains(e.transaction_date))
                    && query
                        .account
                        .as_ref()
                        .map_or(true, |account| &e.account == account)
            })
            .cloned()
            .collect();

        let summary = expense_summary(&filtered);

        match query.sort_by {
            ExpenseSort::Date => filtered.sort_by_key(|e| e.transaction_date),
            ExpenseSort::Amount => filtered.sort_by_key(|e| e.amount),
        }
        if query.order == SortOrder::Desc {
            filtered.reverse();
        }

        Ok(ExpenseListing {
            transactions: query.page.paginate(&filtered),
            summary,
        })
    }

    fn insert_pair(&self, pair: PostedPair) -> AppResult<[LedgerEntryId; 2]> {
        let [primary, balancing] = pair.into_entries();
        let ids = [primary.id, balancing.id];
        let mut tables = self.db.write()?;
        tables.ledger.push(primary);
        tables.ledger.push(balancing);
        Ok(ids)
    }
}
