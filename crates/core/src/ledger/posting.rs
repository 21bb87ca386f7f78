//! The double-entry poster.
//!
//! Takes the single leg a user actually types in and produces the
//! balanced pair of entries the ledger stores. The balancing account is
//! chosen from a small fixed decision table, not inferred.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use rentfolio_shared::types::{OwnerId, PropertyId};

use crate::accounts::{ChartOfAccounts, MainCategory, ACCOUNTS_PAYABLE, BANK, RENTAL_INCOME};
use crate::ledger::entry::{LedgerEntry, NewLedgerEntry};
use crate::ledger::error::LedgerError;

/// The user-supplied leg of a transaction.
#[derive(Debug, Clone)]
pub struct PostingInput {
    /// Primary account name.
    pub account: String,
    /// Unsigned magnitude as entered; the poster applies the sign
    /// convention. May be negative for Bank corrections.
    pub amount: Decimal,
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// Free-text description, copied to both legs.
    pub description: Option<String>,
    /// External reference, copied to both legs.
    pub reference_number: Option<String>,
    /// Owning tenant.
    pub owner_id: OwnerId,
    /// Associated property, if any.
    pub property_id: Option<PropertyId>,
    /// Whether the pair is created already reconciled.
    pub is_reconciled: bool,
}

/// A balanced pair of entries produced by one post.
#[derive(Debug, Clone)]
pub struct PostedPair {
    /// The leg for the account the user named.
    pub primary: LedgerEntry,
    /// The automatically resolved counter-leg.
    pub balancing: LedgerEntry,
}

impl PostedPair {
    /// Consumes the pair in persistence order.
    #[must_use]
    pub fn into_entries(self) -> [LedgerEntry; 2] {
        [self.primary, self.balancing]
    }

    /// Sum of both legs; zero by construction.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.primary.amount + self.balancing.amount
    }
}

/// Turns single legs into balanced entry pairs.
///
/// Pure over its inputs; persistence (and its atomicity) belongs to the
/// store.
#[derive(Debug, Clone, Default)]
pub struct PostingService {
    chart: ChartOfAccounts,
}

impl PostingService {
    /// Creates a poster over the standard chart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chart: ChartOfAccounts::standard(),
        }
    }

    /// Access to the chart the poster classifies against.
    #[must_use]
    pub const fn chart(&self) -> &ChartOfAccounts {
        &self.chart
    }

    /// Produces the balanced pair for one user leg.
    ///
    /// # Errors
    ///
    /// Fails with [`LedgerError::UnknownAccount`] when the primary account
    /// is unregistered, or [`LedgerError::Unbalanceable`] when its category
    /// has no balancing rule. Either way no entry is produced.
    pub fn post(&self, input: PostingInput) -> Result<PostedPair, LedgerError> {
        self.post_flagged(input, false)
    }

    /// Records a property-tax charge as a reconciled, flagged pair
    /// against the "Property Taxes" expense account.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::post`].
    pub fn post_property_tax(
        &self,
        owner_id: OwnerId,
        property_id: PropertyId,
        transaction_date: NaiveDate,
        amount: Decimal,
        description: Option<String>,
    ) -> Result<PostedPair, LedgerError> {
        self.post_flagged(
            PostingInput {
                account: "Property Taxes".to_owned(),
                amount,
                transaction_date,
                description,
                reference_number: None,
                owner_id,
                property_id: Some(property_id),
                is_reconciled: true,
            },
            true,
        )
    }

    fn post_flagged(
        &self,
        input: PostingInput,
        is_property_tax: bool,
    ) -> Result<PostedPair, LedgerError> {
        let classification = self.chart.classify(&input.account);
        let Some(first_side) = classification.main_category.normal_balance() else {
            return Err(LedgerError::UnknownAccount(input.account));
        };

        let signed = self.chart.signed_amount(&input.account, input.amount)?;
        let balancing_account =
            resolve_balancing_account(classification.main_category, &input.account, input.amount)?;

        debug!(
            account = %input.account,
            balancing = balancing_account,
            side = ?first_side,
            "resolved balancing leg"
        );

        let is_portfolio = input.property_id.is_none();
        let leg = |account: String, amount: Decimal| NewLedgerEntry {
            transaction_date: input.transaction_date,
            amount,
            account,
            description: input.description.clone(),
            reference_number: input.reference_number.clone(),
            owner_id: input.owner_id,
            property_id: input.property_id,
            is_reconciled: input.is_reconciled,
            is_verified: false,
            is_portfolio,
            is_property_tax,
        };

        let primary = leg(input.account.clone(), signed).into_entry(&self.chart);
        let balancing = leg(balancing_account.to_owned(), -signed).into_entry(&self.chart);

        Ok(PostedPair { primary, balancing })
    }
}

/// The fixed balancing rule table.
///
/// Every non-Bank account in the four recognized buckets balances against
/// Bank; Bank itself balances against Rental Income for inflows and
/// Accounts Payable otherwise.
fn resolve_balancing_account(
    main_category: MainCategory,
    account: &str,
    amount: Decimal,
) -> Result<&'static str, LedgerError> {
    if account == BANK {
        return Ok(if amount > Decimal::ZERO {
            RENTAL_INCOME
        } else {
            ACCOUNTS_PAYABLE
        });
    }
    match main_category {
        MainCategory::Assets
        | MainCategory::Liabilities
        | MainCategory::Equity
        | MainCategory::Revenue
        | MainCategory::Expenses => Ok(BANK),
        MainCategory::Uncategorized => Err(LedgerError::Unbalanceable {
            account: account.to_owned(),
            main_category: main_category.to_string(),
        }),
    }
}
