//! Statement generation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use rentfolio_shared::config::RetainedEarningsBasis;
use rentfolio_shared::types::DateRange;

use crate::accounts::{ChartOfAccounts, MainCategory, COST_OF_SALES, DISTRIBUTIONS};
use crate::ledger::LedgerEntry;
use crate::statements::types::{BalanceSheet, CashFlowStatement, CategoryLine, IncomeStatement};

/// Accounts whose balance movement feeds the operating-changes section
/// of the cash flow statement.
const OPERATING_WATCH_LIST: &[&str] = &[
    "Accounts Receivable",
    "Prepaid Rent",
    "Accounts Payable",
    "Accrued Expenses",
];

/// Accounts rolled into the share-capital balance sheet line.
const SHARE_CAPITAL_ACCOUNTS: &[&str] =
    &["Contributed Capital", "Owner's Capital", "Partner Contributions"];

/// Accounts rolled into the receivables-and-prepaids line.
const RECEIVABLE_ACCOUNTS: &[&str] = &[
    "Accounts Receivable",
    "Prepaid Expenses",
    "Prepaid Insurance",
    "Prepaid Rent",
];

/// Accounts rolled into the property, plant and equipment line.
const PPE_ACCOUNTS: &[&str] = &[
    "Building",
    "Equipment",
    "Furniture and Fixtures",
    "Land",
    "Leasehold Improvements",
];

/// Looks up the summed reconciled balance of one account strictly before
/// a boundary date. Supplied by the store; statements stay pure.
pub type BalanceBefore<'a> = &'a dyn Fn(&str, NaiveDate) -> Decimal;

/// Generates the three derived statements from reconciled entries.
#[derive(Debug, Clone)]
pub struct StatementService {
    chart: ChartOfAccounts,
    retained_earnings_basis: RetainedEarningsBasis,
}

impl Default for StatementService {
    fn default() -> Self {
        Self::new(RetainedEarningsBasis::default())
    }
}

impl StatementService {
    /// Creates a service over the standard chart.
    #[must_use]
    pub fn new(retained_earnings_basis: RetainedEarningsBasis) -> Self {
        Self {
            chart: ChartOfAccounts::standard(),
            retained_earnings_basis,
        }
    }

    /// Builds the income statement for the period.
    ///
    /// Entries outside the range or not reconciled are ignored; an empty
    /// result set yields an all-zero statement.
    #[must_use]
    pub fn income_statement(&self, range: DateRange, entries: &[LedgerEntry]) -> IncomeStatement {
        let entries = in_scope(range, entries);

        let revenue: Decimal = entries
            .iter()
            .filter(|e| self.main_of(e) == MainCategory::Revenue)
            .map(|e| e.amount)
            .sum();
        let cost_of_sales: Decimal = entries
            .iter()
            .filter(|e| self.sub_of(e) == COST_OF_SALES)
            .map(|e| e.amount)
            .sum();
        let gross_income = revenue - cost_of_sales;

        // Registry revenue categories are seeded so zero rows survive.
        let mut revenue_categories: Vec<CategoryLine> = self
            .chart
            .sub_categories(MainCategory::Revenue)
            .into_iter()
            .map(|sub| CategoryLine::new(sub, Decimal::ZERO))
            .collect();
        for e in &entries {
            if self.main_of(e) == MainCategory::Revenue {
                let sub = self.sub_of(e);
                if let Some(line) = revenue_categories.iter_mut().find(|l| l.label == sub) {
                    line.amount += e.amount;
                }
            }
        }

        let mut overhead_categories: Vec<CategoryLine> = Vec::new();
        for sub in self.chart.sub_categories(MainCategory::Expenses) {
            if sub == COST_OF_SALES {
                continue;
            }
            let amount: Decimal = entries
                .iter()
                .filter(|e| self.main_of(e) == MainCategory::Expenses && self.sub_of(e) == sub)
                .map(|e| e.amount)
                .sum();
            let has_activity = entries
                .iter()
                .any(|e| self.main_of(e) == MainCategory::Expenses && self.sub_of(e) == sub);
            if has_activity {
                overhead_categories.push(CategoryLine::new(sub, amount));
            }
        }
        let overhead_expenses: Decimal = overhead_categories.iter().map(|l| l.amount).sum();
        let net_income = gross_income - overhead_expenses;

        debug!(%revenue, %net_income, "income statement computed");

        IncomeStatement {
            period_start: range.start,
            period_end: range.end,
            revenue,
            revenue_categories,
            cost_of_sales,
            gross_income,
            overhead_expenses,
            overhead_categories,
            net_income,
        }
    }

    /// Builds the balance sheet for the period.
    ///
    /// `opening_retained_earnings` is only added under the
    /// `SinceInception` basis; the default period-delta basis derives
    /// retained earnings from the filtered range alone.
    #[must_use]
    pub fn balance_sheet(
        &self,
        range: DateRange,
        entries: &[LedgerEntry],
        opening_retained_earnings: Decimal,
    ) -> BalanceSheet {
        let entries = in_scope(range, entries);

        let sum_main = |main: MainCategory| -> Decimal {
            entries
                .iter()
                .filter(|e| self.main_of(e) == main)
                .map(|e| e.amount)
                .sum()
        };
        let sum_sub = |main: MainCategory, sub: &str| -> Decimal {
            entries
                .iter()
                .filter(|e| self.main_of(e) == main && self.sub_of(e) == sub)
                .map(|e| e.amount)
                .sum()
        };
        let sum_accounts = |accounts: &[&str]| -> Decimal {
            entries
                .iter()
                .filter(|e| accounts.contains(&e.account.as_str()))
                .map(|e| e.amount)
                .sum()
        };

        let assets = sum_main(MainCategory::Assets);
        let liabilities = sum_main(MainCategory::Liabilities);
        let equity = sum_main(MainCategory::Equity);

        let distributions = sum_accounts(&[DISTRIBUTIONS]);
        let mut retained_earnings =
            sum_main(MainCategory::Revenue) - sum_main(MainCategory::Expenses) - distributions;
        if self.retained_earnings_basis == RetainedEarningsBasis::SinceInception {
            retained_earnings += opening_retained_earnings;
        }

        let liabilities_and_equity = liabilities + equity;

        BalanceSheet {
            period_start: range.start,
            period_end: range.end,
            assets,
            current_assets: sum_sub(MainCategory::Assets, "Current Assets"),
            non_current_assets: sum_sub(MainCategory::Assets, "Non-Current Assets"),
            cash_and_equivalents: sum_accounts(&["Bank"]),
            receivables_and_prepaids: sum_accounts(RECEIVABLE_ACCOUNTS),
            property_plant_equipment: sum_accounts(PPE_ACCOUNTS),
            liabilities,
            current_liabilities: sum_sub(MainCategory::Liabilities, "Current Liabilities"),
            non_current_liabilities: sum_sub(MainCategory::Liabilities, "Non-Current Liabilities"),
            accounts_payable: sum_accounts(&["Accounts Payable"]),
            mortgage_payable: sum_accounts(&["Mortgage Payable"]),
            equity,
            share_capital: sum_accounts(SHARE_CAPITAL_ACCOUNTS),
            distributions,
            retained_earnings,
            liabilities_and_equity,
            is_balanced: assets == liabilities_and_equity,
        }
    }

    /// Builds the cash flow statement for the period.
    ///
    /// `balance_before` returns the summed reconciled balance of one
    /// account dated strictly before the given boundary; watch-list
    /// changes are `balance_before(end + 1 day) - balance_before(start)`.
    #[must_use]
    pub fn cash_flow(
        &self,
        range: DateRange,
        entries: &[LedgerEntry],
        balance_before: BalanceBefore<'_>,
    ) -> CashFlowStatement {
        let scoped = in_scope(range, entries);

        let net_income = self.income_statement(range, entries).net_income;

        let depreciation_amortization: Decimal = scoped
            .iter()
            .filter(|e| {
                self.sub_of(e) == "Depreciation & Amortization" && e.amount < Decimal::ZERO
            })
            .map(|e| e.amount)
            .sum();

        let end_boundary = range.end_exclusive();
        let operating_changes: Vec<CategoryLine> = OPERATING_WATCH_LIST
            .iter()
            .map(|account| {
                let change =
                    balance_before(account, end_boundary) - balance_before(account, range.start);
                CategoryLine::new(format!("Increase (Decrease) in {account}"), change)
            })
            .collect();

        let revenue_total: Decimal = scoped
            .iter()
            .filter(|e| self.main_of(e) == MainCategory::Revenue)
            .map(|e| e.amount)
            .sum();
        let expense_reversals: Decimal = scoped
            .iter()
            .filter(|e| self.main_of(e) == MainCategory::Expenses && e.amount < Decimal::ZERO)
            .map(|e| e.amount)
            .sum();
        let changes_total: Decimal = operating_changes.iter().map(|l| l.amount).sum();
        let cash_from_operations = revenue_total + expense_reversals + changes_total;

        let investing_activities =
            self.account_lines(&scoped, &[(MainCategory::Assets, "Non-Current Assets")]);
        let cash_from_investing: Decimal = investing_activities.iter().map(|l| l.amount).sum();

        let financing_activities = self.account_lines(
            &scoped,
            &[
                (MainCategory::Liabilities, "Current Liabilities"),
                (MainCategory::Liabilities, "Non-Current Liabilities"),
                (MainCategory::Equity, "Equity"),
            ],
        );
        let cash_from_financing: Decimal = financing_activities.iter().map(|l| l.amount).sum();

        let net_cash_flow = cash_from_operations + cash_from_investing + cash_from_financing;

        CashFlowStatement {
            period_start: range.start,
            period_end: range.end,
            net_income,
            depreciation_amortization,
            operating_changes,
            cash_from_operations,
            investing_activities,
            cash_from_investing,
            financing_activities,
            cash_from_financing,
            net_cash_flow,
        }
    }

    /// One line per account in the given buckets, for accounts with any
    /// activity in scope. Chart presentation order.
    fn account_lines(
        &self,
        entries: &[&LedgerEntry],
        buckets: &[(MainCategory, &str)],
    ) -> Vec<CategoryLine> {
        let mut lines = Vec::new();
        for &(main, sub) in buckets {
            for account in self.chart.accounts_in(main, sub) {
                let matching: Vec<&&LedgerEntry> =
                    entries.iter().filter(|e| e.account == account).collect();
                if matching.is_empty() {
                    continue;
                }
                let amount: Decimal = matching.iter().map(|e| e.amount).sum();
                lines.push(CategoryLine::new(account, amount));
            }
        }
        lines
    }

    /// Classification from the registry, not the denormalized copy, so
    /// every statement sees one consistent table.
    fn main_of(&self, entry: &LedgerEntry) -> MainCategory {
        self.chart.classify(&entry.account).main_category
    }

    fn sub_of(&self, entry: &LedgerEntry) -> &'static str {
        self.chart.classify(&entry.account).sub_category
    }
}

/// Reconciled entries whose date falls inside the inclusive range.
fn in_scope(range: DateRange, entries: &[LedgerEntry]) -> Vec<&LedgerEntry> {
    entries
        .iter()
        .filter(|e| e.is_reconciled && range.contains(e.transaction_date))
        .collect()
}
