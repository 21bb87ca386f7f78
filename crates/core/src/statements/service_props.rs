//! Property-based tests for statement arithmetic.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use rentfolio_shared::types::{DateRange, OwnerId};

use super::service::StatementService;
use crate::accounts::{ChartOfAccounts, MainCategory};
use crate::ledger::{LedgerEntry, PostingInput, PostingService};

fn any_amount() -> impl Strategy<Value = Decimal> {
    (-500_000i64..500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn revenue_or_expense_account() -> impl Strategy<Value = String> {
    let chart = ChartOfAccounts::standard();
    let names: Vec<String> = chart
        .accounts_in_main(MainCategory::Revenue)
        .chain(chart.accounts_in_main(MainCategory::Expenses))
        .map(str::to_owned)
        .collect();
    proptest::sample::select(names)
}

fn posted_entries(pairs: Vec<(String, Decimal)>) -> Vec<LedgerEntry> {
    let poster = PostingService::new();
    let owner = OwnerId::new();
    let mut entries = Vec::new();
    for (account, amount) in pairs {
        let pair = poster
            .post(PostingInput {
                account,
                amount,
                transaction_date: NaiveDate::from_ymd_opt(2024, 4, 12).unwrap(),
                description: None,
                reference_number: None,
                owner_id: owner,
                property_id: None,
                is_reconciled: true,
            })
            .unwrap();
        entries.extend(pair.into_entries());
    }
    entries
}

proptest! {
    /// gross = revenue - cost of sales and net = gross - overhead, for
    /// any mix of revenue and expense postings.
    #[test]
    fn prop_income_statement_arithmetic_identity(
        pairs in proptest::collection::vec((revenue_or_expense_account(), any_amount()), 0..12),
    ) {
        let entries = posted_entries(pairs);
        let service = StatementService::default();
        let range = DateRange::parse("2024-04-01", "2024-04-30").unwrap();
        let stmt = service.income_statement(range, &entries);

        prop_assert_eq!(stmt.gross_income, stmt.revenue - stmt.cost_of_sales);
        prop_assert_eq!(stmt.net_income, stmt.gross_income - stmt.overhead_expenses);

        let overhead_sum: Decimal = stmt.overhead_categories.iter().map(|l| l.amount).sum();
        prop_assert_eq!(stmt.overhead_expenses, overhead_sum);

        let revenue_sum: Decimal = stmt.revenue_categories.iter().map(|l| l.amount).sum();
        prop_assert_eq!(stmt.revenue, revenue_sum);
    }

    /// Statements over an unchanged ledger are idempotent.
    #[test]
    fn prop_statement_generation_is_idempotent(
        pairs in proptest::collection::vec((revenue_or_expense_account(), any_amount()), 0..8),
    ) {
        let entries = posted_entries(pairs);
        let service = StatementService::default();
        let range = DateRange::parse("2024-04-01", "2024-04-30").unwrap();

        let first = service.income_statement(range, &entries);
        let second = service.income_statement(range, &entries);
        prop_assert_eq!(first.net_income, second.net_income);

        let sheet_a = service.balance_sheet(range, &entries, Decimal::ZERO);
        let sheet_b = service.balance_sheet(range, &entries, Decimal::ZERO);
        prop_assert_eq!(sheet_a.assets, sheet_b.assets);
        prop_assert_eq!(sheet_a.retained_earnings, sheet_b.retained_earnings);
    }
}
