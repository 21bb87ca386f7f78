//! Property-based tests for the double-entry poster.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use rentfolio_shared::types::OwnerId;

use super::posting::{PostingInput, PostingService};
use crate::accounts::{ChartOfAccounts, MainCategory, NormalBalance};

/// Strategy for decimal amounts between -10,000.00 and 10,000.00.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy over every registered account name.
fn registered_account() -> impl Strategy<Value = String> {
    let chart = ChartOfAccounts::standard();
    let names: Vec<String> = [
        MainCategory::Assets,
        MainCategory::Liabilities,
        MainCategory::Equity,
        MainCategory::Revenue,
        MainCategory::Expenses,
    ]
    .into_iter()
    .flat_map(|main| chart.accounts_in_main(main).map(str::to_owned))
    .collect();
    proptest::sample::select(names)
}

fn make_input(account: String, amount: Decimal) -> PostingInput {
    PostingInput {
        account,
        amount,
        transaction_date: NaiveDate::from_ymd_opt(2024, 4, 12).unwrap(),
        description: None,
        reference_number: None,
        owner_id: OwnerId::new(),
        property_id: None,
        is_reconciled: true,
    }
}

proptest! {
    /// Every successful post balances exactly to zero.
    #[test]
    fn prop_posted_pairs_sum_to_zero(account in registered_account(), amount in any_amount()) {
        let poster = PostingService::new();
        let pair = poster.post(make_input(account, amount)).unwrap();
        prop_assert_eq!(pair.net(), Decimal::ZERO);
    }

    /// The primary leg's sign follows the account's normal balance.
    #[test]
    fn prop_primary_sign_follows_normal_balance(
        account in registered_account(),
        amount in any_amount(),
    ) {
        let chart = ChartOfAccounts::standard();
        let poster = PostingService::new();
        let expected = match chart.normal_balance(&account).unwrap() {
            NormalBalance::Debit => amount,
            NormalBalance::Credit => -amount,
        };
        let pair = poster.post(make_input(account, amount)).unwrap();
        prop_assert_eq!(pair.primary.amount, expected);
    }

    /// Both legs always classify into real buckets.
    #[test]
    fn prop_no_leg_is_uncategorized(account in registered_account(), amount in any_amount()) {
        let poster = PostingService::new();
        let pair = poster.post(make_input(account, amount)).unwrap();
        prop_assert_ne!(pair.primary.main_category, MainCategory::Uncategorized);
        prop_assert_ne!(pair.balancing.main_category, MainCategory::Uncategorized);
    }
}
