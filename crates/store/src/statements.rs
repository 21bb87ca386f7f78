//! Statement generation over stored entries.
//!
//! Bridges the pure statement math to the ledger repository: fetches the
//! reconciled entries for the period, wires the balance-lookup closure,
//! and applies the configured retained-earnings basis.

use rust_decimal::Decimal;
use tracing::instrument;

use rentfolio_core::statements::{
    BalanceSheet, CashFlowStatement, IncomeStatement, StatementService,
};
use rentfolio_shared::config::RetainedEarningsBasis;
use rentfolio_shared::types::{DateRange, OwnerId};
use rentfolio_shared::AppResult;

use crate::repositories::LedgerRepository;

/// Headline figures for the financial overview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialOverview {
    /// Total assets over the period.
    pub total_assets: Decimal,
    /// Net income over the period.
    pub net_income: Decimal,
    /// Net cash flow over the period.
    pub net_cash_flow: Decimal,
}

/// Generates statements for one owner from the stored ledger.
#[derive(Debug, Clone)]
pub struct StatementGenerator {
    ledger: LedgerRepository,
    service: StatementService,
    basis: RetainedEarningsBasis,
}

impl StatementGenerator {
    /// Creates a generator with the configured retained-earnings basis.
    #[must_use]
    pub fn new(ledger: LedgerRepository, basis: RetainedEarningsBasis) -> Self {
        Self {
            ledger,
            service: StatementService::new(basis),
            basis,
        }
    }

    /// Income statement for the period.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    #[instrument(skip(self))]
    pub fn income_statement(
        &self,
        owner_id: OwnerId,
        range: DateRange,
    ) -> AppResult<IncomeStatement> {
        let entries = self.ledger.reconciled_in_range(owner_id, range)?;
        Ok(self.service.income_statement(range, &entries))
    }

    /// Balance sheet for the period.
    ///
    /// Under the since-inception basis the opening retained earnings is
    /// taken from all reconciled history before the period start.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    #[instrument(skip(self))]
    pub fn balance_sheet(&self, owner_id: OwnerId, range: DateRange) -> AppResult<BalanceSheet> {
        let entries = self.ledger.reconciled_in_range(owner_id, range)?;
        let opening = match self.basis {
            RetainedEarningsBasis::PeriodDelta => Decimal::ZERO,
            RetainedEarningsBasis::SinceInception => {
                self.ledger.retained_earnings_before(owner_id, range.start)?
            }
        };
        Ok(self.service.balance_sheet(range, &entries, opening))
    }

    /// Cash flow statement for the period.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    #[instrument(skip(self))]
    pub fn cash_flow(&self, owner_id: OwnerId, range: DateRange) -> AppResult<CashFlowStatement> {
        let entries = self.ledger.reconciled_in_range(owner_id, range)?;
        let lookup = |account: &str, boundary: chrono::NaiveDate| -> Decimal {
            self.ledger
                .balance_before(owner_id, account, boundary)
                .unwrap_or(Decimal::ZERO)
        };
        Ok(self.service.cash_flow(range, &entries, &lookup))
    }

    /// Headline totals for the financials page: total assets, net
    /// income, and net cash flow over one period.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn financial_overview(
        &self,
        owner_id: OwnerId,
        range: DateRange,
    ) -> AppResult<FinancialOverview> {
        let balance_sheet = self.balance_sheet(owner_id, range)?;
        let income = self.income_statement(owner_id, range)?;
        let cash = self.cash_flow(owner_id, range)?;
        Ok(FinancialOverview {
            total_assets: balance_sheet.assets,
            net_income: income.net_income,
            net_cash_flow: cash.net_cash_flow,
        })
    }
}
