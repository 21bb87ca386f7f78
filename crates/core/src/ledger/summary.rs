//! Grouping helpers for categorized ledger views.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::ledger::entry::LedgerEntry;

/// Expense totals grouped by sub category, then by account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// Grand total across all groups.
    pub total: Decimal,
    /// sub category → account → summed amount.
    pub by_sub_category: BTreeMap<String, BTreeMap<String, Decimal>>,
}

/// Sums entries per sub category.
#[must_use]
pub fn group_by_sub_category(entries: &[LedgerEntry]) -> BTreeMap<String, Decimal> {
    let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in entries {
        *groups.entry(e.sub_category.clone()).or_default() += e.amount;
    }
    groups
}

/// Builds the two-level expense breakdown used by expense listings.
#[must_use]
pub fn expense_summary(entries: &[LedgerEntry]) -> ExpenseSummary {
    let mut total = Decimal::ZERO;
    let mut by_sub_category: BTreeMap<String, BTreeMap<String, Decimal>> = BTreeMap::new();
    for e in entries {
        total += e.amount;
        *by_sub_category
            .entry(e.sub_category.clone())
            .or_default()
            .entry(e.account.clone())
            .or_default() += e.amount;
    }
    ExpenseSummary {
        total,
        by_sub_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use rentfolio_shared::types::OwnerId;

    use crate::accounts::ChartOfAccounts;
    use crate::ledger::entry::NewLedgerEntry;

    fn entry(account: &str, amount: Decimal) -> LedgerEntry {
        NewLedgerEntry {
            transaction_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            amount,
            account: account.to_owned(),
            description: None,
            reference_number: None,
            owner_id: OwnerId::new(),
            property_id: None,
            is_reconciled: true,
            is_verified: false,
            is_portfolio: true,
            is_property_tax: false,
        }
        .into_entry(&ChartOfAccounts::standard())
    }

    #[test]
    fn test_group_by_sub_category() {
        let entries = vec![
            entry("Utilities", dec!(100)),
            entry("Lighting", dec!(40)),
            entry("Property Taxes", dec!(300)),
        ];
        let groups = group_by_sub_category(&entries);
        assert_eq!(groups["Utilities"], dec!(140));
        assert_eq!(groups["Cost of Sales"], dec!(300));
    }

    #[test]
    fn test_expense_summary_two_levels() {
        let entries = vec![
            entry("Utilities", dec!(100)),
            entry("Utilities", dec!(25.50)),
            entry("Lighting", dec!(40)),
        ];
        let summary = expense_summary(&entries);
        assert_eq!(summary.total, dec!(165.50));
        assert_eq!(summary.by_sub_category["Utilities"]["Utilities"], dec!(125.50));
        assert_eq!(summary.by_sub_category["Utilities"]["Lighting"], dec!(40));
    }

    #[test]
    fn test_empty_input_is_zero() {
        let summary = expense_summary(&[]);
        assert_eq!(summary.total, Decimal::ZERO);
        assert!(summary.by_sub_category.is_empty());
    }
}
