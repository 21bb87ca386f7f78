//! The canonical chart of accounts.
//!
//! One static table drives every classification in the system; there is
//! deliberately no second lookup path that could drift out of sync.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use super::{Classification, ClassificationError, MainCategory, NormalBalance};

/// Cash / operating bank account. Every posted pair touches this unless
/// the primary leg is itself `Bank`.
pub const BANK: &str = "Bank";
/// Default revenue account for unexplained bank inflows.
pub const RENTAL_INCOME: &str = "Rental Income";
/// Default liability account for unexplained bank outflows.
pub const ACCOUNTS_PAYABLE: &str = "Accounts Payable";
/// Sub category holding direct property costs (taxes, cleaning, pest
/// control). Excluded from the overhead breakdown.
pub const COST_OF_SALES: &str = "Cost of Sales";
/// Equity account reducing retained earnings when owners draw cash.
pub const DISTRIBUTIONS: &str = "Distributions";
/// Sentinel classification for accounts absent from the registry.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One row of the chart: account name and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountDef {
    /// Account name as it appears on ledger entries.
    pub name: &'static str,
    /// Top-level bucket.
    pub main_category: MainCategory,
    /// Second-level classification.
    pub sub_category: &'static str,
}

const fn def(
    name: &'static str,
    main_category: MainCategory,
    sub_category: &'static str,
) -> AccountDef {
    AccountDef {
        name,
        main_category,
        sub_category,
    }
}

use MainCategory::{Assets, Equity, Expenses, Liabilities, Revenue};

/// Every recognized account, grouped by (main, sub) in presentation order.
/// Statement line ordering follows this table.
const STANDARD_ACCOUNTS: &[AccountDef] = &[
    // Assets
    def("Accounts Receivable", Assets, "Current Assets"),
    def("Prepaid Expenses", Assets, "Current Assets"),
    def("Prepaid Insurance", Assets, "Current Assets"),
    def("Prepaid Rent", Assets, "Current Assets"),
    def("Bank", Assets, "Current Assets"),
    def("Building", Assets, "Non-Current Assets"),
    def("Equipment", Assets, "Non-Current Assets"),
    def("Furniture and Fixtures", Assets, "Non-Current Assets"),
    def("Land", Assets, "Non-Current Assets"),
    def("Leasehold Improvements", Assets, "Non-Current Assets"),
    def("Tenant Improvements", Assets, "Non-Current Assets"),
    // Liabilities
    def("Accounts Payable", Liabilities, "Current Liabilities"),
    def("Accrued Expenses", Liabilities, "Current Liabilities"),
    def("Deferred Revenue", Liabilities, "Current Liabilities"),
    def("Maintenance Reserves", Liabilities, "Current Liabilities"),
    def("Property Tax Payable", Liabilities, "Current Liabilities"),
    def("Security Deposits", Liabilities, "Current Liabilities"),
    def("Unearned Rent", Liabilities, "Current Liabilities"),
    def("Short-Term Loan", Liabilities, "Current Liabilities"),
    def("Long-Term Debt", Liabilities, "Non-Current Liabilities"),
    def("Mortgage Payable", Liabilities, "Non-Current Liabilities"),
    def("Long-Term Loan", Liabilities, "Non-Current Liabilities"),
    // Equity (flat: sub category mirrors the main bucket)
    def("Contributed Capital", Equity, "Equity"),
    def("Current Year Earnings", Equity, "Equity"),
    def("Distributions", Equity, "Equity"),
    def("Owner's Capital", Equity, "Equity"),
    def("Owner's Withdrawals", Equity, "Equity"),
    def("Partner Contributions", Equity, "Equity"),
    def("Retained Earnings", Equity, "Equity"),
    def("Retained Earnings (Accumulated)", Equity, "Equity"),
    def("Retained Earnings (Current Year)", Equity, "Equity"),
    // Revenue
    def("Rental Income", Revenue, "Rental Income"),
    def("Parking Fees", Revenue, "Rental Income"),
    def("Storage Unit Rental", Revenue, "Rental Income"),
    def("Application Fees", Revenue, "Other Income"),
    def("Common Area Revenue", Revenue, "Other Income"),
    def("Late Fee Income", Revenue, "Other Income"),
    def("Late Payment Penalties", Revenue, "Other Income"),
    def("Other Revenue", Revenue, "Other Income"),
    def("Pet Rent", Revenue, "Other Income"),
    def("Utility Reimbursements", Revenue, "Other Income"),
    // Expenses
    def("Administrative Expenses", Expenses, "Operating Expenses"),
    def("Legal and Professional Fees", Expenses, "Operating Expenses"),
    def("Marketing and Advertising", Expenses, "Operating Expenses"),
    def("Property Management Fees", Expenses, "Operating Expenses"),
    def("Security Systems", Expenses, "Operating Expenses"),
    def("Landscaping", Expenses, "Operating Expenses"),
    def("Levies", Expenses, "Operating Expenses"),
    def("Home Owners Association Fees", Expenses, "Operating Expenses"),
    def(
        "Maintenance and Repairs",
        Expenses,
        "Maintenance and Repairs Expenses",
    ),
    def(
        "Common Area Maintenance (CAM)",
        Expenses,
        "Maintenance and Repairs Expenses",
    ),
    def(
        "Elevator Maintenance",
        Expenses,
        "Maintenance and Repairs Expenses",
    ),
    def(
        "Parking Lot Maintenance",
        Expenses,
        "Maintenance and Repairs Expenses",
    ),
    def("Bank Fees", Expenses, "Financial Expenses"),
    def("Credit Card Processing Fees", Expenses, "Financial Expenses"),
    def("Loan Processing Fees", Expenses, "Financial Expenses"),
    def("Mortgage Interest", Expenses, "Financial Expenses"),
    def("Property Taxes", Expenses, COST_OF_SALES),
    def("Property Tax Assessments", Expenses, COST_OF_SALES),
    def("Pest Control", Expenses, COST_OF_SALES),
    def("Snow Removal", Expenses, COST_OF_SALES),
    def("Cleaning Services", Expenses, COST_OF_SALES),
    def("Waste Management", Expenses, COST_OF_SALES),
    def("Insurance", Expenses, "Insurance Expenses"),
    def("Property Insurance", Expenses, "Insurance Expenses"),
    def("Property Manager", Expenses, "Staff Expenses"),
    def("Cleaning Staff", Expenses, "Staff Expenses"),
    def("Security Guard", Expenses, "Staff Expenses"),
    def("Receptionist", Expenses, "Staff Expenses"),
    def("Utilities", Expenses, "Utilities"),
    def("Common Area Utilities", Expenses, "Utilities"),
    def("Lighting", Expenses, "Utilities"),
    def("Depreciation", Expenses, "Depreciation & Amortization"),
    def("Amortization", Expenses, "Depreciation & Amortization"),
];

/// Static account registry with indexed lookup.
///
/// Loaded once at process start; not user-editable.
#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    accounts: &'static [AccountDef],
    by_name: HashMap<&'static str, usize>,
}

impl ChartOfAccounts {
    /// Builds the standard property-management chart.
    #[must_use]
    pub fn standard() -> Self {
        let by_name = STANDARD_ACCOUNTS
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name, i))
            .collect();
        Self {
            accounts: STANDARD_ACCOUNTS,
            by_name,
        }
    }

    /// Classifies an account name.
    ///
    /// Total: unregistered names resolve to the `Uncategorized` sentinel
    /// pair with a warning, never an error. Statement math then skips the
    /// entry rather than aborting the whole computation.
    #[must_use]
    pub fn classify(&self, account: &str) -> Classification {
        match self.lookup(account) {
            Some(d) => Classification {
                main_category: d.main_category,
                sub_category: d.sub_category,
            },
            None => {
                warn!(account, "account not in registry, treating as Uncategorized");
                Classification {
                    main_category: MainCategory::Uncategorized,
                    sub_category: UNCATEGORIZED,
                }
            }
        }
    }

    /// Strict lookup of the normal balance side.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::UnknownAccount`] for unregistered
    /// names; posting must not guess a sign.
    pub fn normal_balance(&self, account: &str) -> Result<NormalBalance, ClassificationError> {
        self.lookup(account)
            .and_then(|d| d.main_category.normal_balance())
            .ok_or_else(|| ClassificationError::UnknownAccount(account.to_owned()))
    }

    /// Applies the sign convention to a positive magnitude: debit-normal
    /// accounts keep `+amount`, credit-normal accounts flip to `-amount`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::UnknownAccount`] for unregistered
    /// names.
    pub fn signed_amount(
        &self,
        account: &str,
        amount: Decimal,
    ) -> Result<Decimal, ClassificationError> {
        match self.normal_balance(account)? {
            NormalBalance::Debit => Ok(amount),
            NormalBalance::Credit => Ok(-amount),
        }
    }

    /// True if the account is registered.
    #[must_use]
    pub fn contains(&self, account: &str) -> bool {
        self.by_name.contains_key(account)
    }

    /// Account names in a (main, sub) bucket, in presentation order.
    pub fn accounts_in<'a>(
        &'a self,
        main_category: MainCategory,
        sub_category: &'a str,
    ) -> impl Iterator<Item = &'static str> + 'a {
        self.accounts
            .iter()
            .filter(move |d| d.main_category == main_category && d.sub_category == sub_category)
            .map(|d| d.name)
    }

    /// Account names under a main category, in presentation order.
    pub fn accounts_in_main(
        &self,
        main_category: MainCategory,
    ) -> impl Iterator<Item = &'static str> + '_ {
        self.accounts
            .iter()
            .filter(move |d| d.main_category == main_category)
            .map(|d| d.name)
    }

    /// Distinct sub categories under a main category, in first-appearance
    /// order.
    #[must_use]
    pub fn sub_categories(&self, main_category: MainCategory) -> Vec<&'static str> {
        let mut subs = Vec::new();
        for d in self.accounts {
            if d.main_category == main_category && !subs.contains(&d.sub_category) {
                subs.push(d.sub_category);
            }
        }
        subs
    }

    fn lookup(&self, account: &str) -> Option<&AccountDef> {
        self.by_name.get(account).map(|&i| &self.accounts[i])
    }
}

impl Default for ChartOfAccounts {
    fn default() -> Self {
        Self::standard()
    }
}
