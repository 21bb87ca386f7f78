//! CSV rendering of financial statements.
//!
//! Layout rules shared by all three statements: two columns
//! (`Category,Amount`), section headers as bare rows with an empty
//! amount, running totals interspersed between the line items. Amounts
//! are plain 2-dp decimals so the file parses back to the same
//! category-to-amount mapping.

use rust_decimal::Decimal;
use thiserror::Error;

use rentfolio_shared::types::money::plain_amount;
use rentfolio_shared::types::DateRange;

use crate::accounts::{ChartOfAccounts, MainCategory};
use crate::ledger::LedgerEntry;
use crate::statements::{BalanceSheet, CashFlowStatement, IncomeStatement};

/// Errors raised while writing CSV output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying CSV writer failure.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    /// Buffer recovery failure after writing.
    #[error("csv buffer error: {0}")]
    Buffer(String),
}

/// Renders statements as CSV byte streams.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    chart: ChartOfAccounts,
}

impl CsvExporter {
    /// Creates an exporter over the standard chart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chart: ChartOfAccounts::standard(),
        }
    }

    /// Renders an income statement.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the CSV writer fails.
    pub fn income_statement(&self, stmt: &IncomeStatement) -> Result<Vec<u8>, ExportError> {
        let mut w = csv::Writer::from_writer(Vec::new());
        w.write_record(["Category", "Amount"])?;

        write_header(&mut w, "Revenue")?;
        for line in &stmt.revenue_categories {
            write_line(&mut w, &line.label, line.amount)?;
        }
        write_line(&mut w, "Total Revenue", stmt.revenue)?;

        write_header(&mut w, "Cost of Sales")?;
        write_line(&mut w, "Total Cost of Sales", stmt.cost_of_sales)?;
        write_line(&mut w, "Gross Income", stmt.gross_income)?;

        write_header(&mut w, "Overhead Expenses")?;
        for line in &stmt.overhead_categories {
            write_line(&mut w, &line.label, line.amount)?;
        }
        write_line(&mut w, "Total Overhead Expenses", stmt.overhead_expenses)?;
        write_line(&mut w, "Net Income", stmt.net_income)?;

        finish(w)
    }

    /// Renders a balance sheet.
    ///
    /// Per-account rows cover every registry account in each bucket,
    /// zeros included, summed from the same reconciled entries the
    /// statement was derived from.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the CSV writer fails.
    pub fn balance_sheet(
        &self,
        sheet: &BalanceSheet,
        entries: &[LedgerEntry],
    ) -> Result<Vec<u8>, ExportError> {
        let range = DateRange {
            start: sheet.period_start,
            end: sheet.period_end,
        };
        let account_sum = |account: &str| -> Decimal {
            entries
                .iter()
                .filter(|e| {
                    e.is_reconciled && range.contains(e.transaction_date) && e.account == account
                })
                .map(|e| e.amount)
                .sum()
        };

        let mut w = csv::Writer::from_writer(Vec::new());
        w.write_record(["Category", "Amount"])?;

        write_header(&mut w, "Assets")?;
        write_header(&mut w, "Current Assets")?;
        for account in self.chart.accounts_in(MainCategory::Assets, "Current Assets") {
            write_line(&mut w, account, account_sum(account))?;
        }
        write_header(&mut w, "Non-Current Assets")?;
        for account in self
            .chart
            .accounts_in(MainCategory::Assets, "Non-Current Assets")
        {
            write_line(&mut w, account, account_sum(account))?;
        }
        write_line(&mut w, "Total Non-Current Assets", sheet.non_current_assets)?;
        write_line(&mut w, "Total Assets", sheet.assets)?;

        write_header(&mut w, "Liabilities")?;
        write_header(&mut w, "Current Liabilities")?;
        for account in self
            .chart
            .accounts_in(MainCategory::Liabilities, "Current Liabilities")
        {
            write_line(&mut w, account, account_sum(account))?;
        }
        write_line(&mut w, "Total Current Liabilities", sheet.current_liabilities)?;
        write_header(&mut w, "Non-Current Liabilities")?;
        for account in self
            .chart
            .accounts_in(MainCategory::Liabilities, "Non-Current Liabilities")
        {
            write_line(&mut w, account, account_sum(account))?;
        }
        write_line(
            &mut w,
            "Total Non-Current Liabilities",
            sheet.non_current_liabilities,
        )?;
        write_line(&mut w, "Total Liabilities", sheet.liabilities)?;

        write_header(&mut w, "Equity")?;
        for account in self.chart.accounts_in(MainCategory::Equity, "Equity") {
            write_line(&mut w, account, account_sum(account))?;
        }
        write_line(&mut w, "Total Equity", sheet.equity)?;

        finish(w)
    }

    /// Renders a cash flow statement.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the CSV writer fails.
    pub fn cash_flow(&self, stmt: &CashFlowStatement) -> Result<Vec<u8>, ExportError> {
        let mut w = csv::Writer::from_writer(Vec::new());
        w.write_record(["Category", "Amount"])?;

        write_header(&mut w, "Operating Activities")?;
        write_line(&mut w, "Net Income", stmt.net_income)?;
        write_line(
            &mut w,
            "Depreciation & Amortization",
            stmt.depreciation_amortization,
        )?;
        for line in &stmt.operating_changes {
            write_line(&mut w, &line.label, line.amount)?;
        }
        write_line(&mut w, "Cash from Operations", stmt.cash_from_operations)?;

        write_header(&mut w, "Investing Activities")?;
        for line in &stmt.investing_activities {
            write_line(&mut w, &line.label, line.amount)?;
        }
        write_line(&mut w, "Cash from Investing", stmt.cash_from_investing)?;

        write_header(&mut w, "Financing Activities")?;
        for line in &stmt.financing_activities {
            write_line(&mut w, &line.label, line.amount)?;
        }
        write_line(&mut w, "Cash from Financing", stmt.cash_from_financing)?;
        write_line(&mut w, "Net Cash Flow", stmt.net_cash_flow)?;

        finish(w)
    }
}

fn write_header(w: &mut csv::Writer<Vec<u8>>, label: &str) -> Result<(), ExportError> {
    w.write_record([label, ""])?;
    Ok(())
}

fn write_line(
    w: &mut csv::Writer<Vec<u8>>,
    label: &str,
    amount: Decimal,
) -> Result<(), ExportError> {
    w.write_record([label, &plain_amount(amount)])?;
    Ok(())
}

fn finish(w: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    w.into_inner().map_err(|e| ExportError::Buffer(e.to_string()))
}
