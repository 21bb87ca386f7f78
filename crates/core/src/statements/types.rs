//! Statement data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One labelled line of a statement section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLine {
    /// Line label (sub category, account, or watch-list caption).
    pub label: String,
    /// Summed amount.
    pub amount: Decimal,
}

impl CategoryLine {
    /// Convenience constructor.
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Income statement for one owner over one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Period start (inclusive).
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
    /// Total revenue.
    pub revenue: Decimal,
    /// Revenue by sub category; registry categories appear even at zero.
    pub revenue_categories: Vec<CategoryLine>,
    /// Direct property costs (Cost of Sales sub category).
    pub cost_of_sales: Decimal,
    /// Revenue less cost of sales.
    pub gross_income: Decimal,
    /// Expenses outside Cost of Sales.
    pub overhead_expenses: Decimal,
    /// Overhead by sub category, only categories with activity.
    pub overhead_categories: Vec<CategoryLine>,
    /// Gross income less overhead.
    pub net_income: Decimal,
}

/// Balance sheet for one owner over one period.
///
/// Retained earnings here is a range-filtered delta by default, not a
/// running balance from inception; see `RetainedEarningsBasis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Period start (inclusive).
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
    /// Total assets.
    pub assets: Decimal,
    /// Current assets subtotal.
    pub current_assets: Decimal,
    /// Non-current assets subtotal.
    pub non_current_assets: Decimal,
    /// Bank account balance movement.
    pub cash_and_equivalents: Decimal,
    /// Receivables plus prepaid accounts.
    pub receivables_and_prepaids: Decimal,
    /// Property, plant and equipment accounts.
    pub property_plant_equipment: Decimal,
    /// Total liabilities.
    pub liabilities: Decimal,
    /// Current liabilities subtotal.
    pub current_liabilities: Decimal,
    /// Non-current liabilities subtotal.
    pub non_current_liabilities: Decimal,
    /// Accounts Payable line.
    pub accounts_payable: Decimal,
    /// Mortgage Payable line.
    pub mortgage_payable: Decimal,
    /// Total equity.
    pub equity: Decimal,
    /// Contributed/owner/partner capital accounts.
    pub share_capital: Decimal,
    /// Distributions line.
    pub distributions: Decimal,
    /// Derived retained earnings.
    pub retained_earnings: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity. Reported only,
    /// never enforced.
    pub is_balanced: bool,
}

/// Cash flow statement for one owner over one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Period start (inclusive).
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
    /// Net income over the period (income statement bottom line).
    pub net_income: Decimal,
    /// Depreciation and amortization display line (negative D&A bucket
    /// amounts). Not part of `net_cash_flow`.
    pub depreciation_amortization: Decimal,
    /// Watch-list balance changes over the period.
    pub operating_changes: Vec<CategoryLine>,
    /// Net cash from operating activities.
    pub cash_from_operations: Decimal,
    /// Non-current asset activity, one line per active account.
    pub investing_activities: Vec<CategoryLine>,
    /// Net cash from investing activities.
    pub cash_from_investing: Decimal,
    /// Liability and equity activity, one line per active account.
    pub financing_activities: Vec<CategoryLine>,
    /// Net cash from financing activities.
    pub cash_from_financing: Decimal,
    /// Operations + investing + financing.
    pub net_cash_flow: Decimal,
}
