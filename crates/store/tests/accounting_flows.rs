//! End-to-end flows over the store: posting, statements, and export.

use chrono::NaiveDate;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rentfolio_core::export::CsvExporter;
use rentfolio_core::ledger::{NewLedgerEntry, PostingInput};
use rentfolio_shared::config::RetainedEarningsBasis;
use rentfolio_shared::types::{DateRange, OwnerId, PageRequest, PropertyId};
use rentfolio_store::{Database, LedgerRepository, StatementGenerator};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn raw_entry(
    owner: OwnerId,
    account: &str,
    amount: Decimal,
    transaction_date: NaiveDate,
    is_reconciled: bool,
) -> NewLedgerEntry {
    NewLedgerEntry {
        transaction_date,
        amount,
        account: account.to_owned(),
        description: None,
        reference_number: None,
        owner_id: owner,
        property_id: None,
        is_reconciled,
        is_verified: false,
        is_portfolio: true,
        is_property_tax: false,
    }
}

fn generator(ledger: &LedgerRepository) -> StatementGenerator {
    StatementGenerator::new(ledger.clone(), RetainedEarningsBasis::PeriodDelta)
}

/// One 1000.00 rental income entry and one 300.00 management fee entry
/// yield revenue 1000, overhead 300, net income 700.
#[test]
fn test_rent_and_fee_month() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    let d = date(2024, 5, 10);
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(1000), d, true))
        .unwrap();
    ledger
        .create(raw_entry(owner, "Property Management Fees", dec!(300), d, true))
        .unwrap();

    let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
    let stmt = generator(&ledger).income_statement(owner, range).unwrap();

    assert_eq!(stmt.revenue, dec!(1000));
    assert_eq!(stmt.overhead_expenses, dec!(300));
    assert_eq!(stmt.net_income, dec!(700));
    assert_eq!(stmt.cost_of_sales, Decimal::ZERO);
}

/// A positive Bank post balances against Rental Income with a negated
/// amount.
#[test]
fn test_bank_deposit_balances_against_rental_income() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    let [primary, balancing] = ledger
        .post(PostingInput {
            account: "Bank".to_owned(),
            amount: dec!(500),
            transaction_date: date(2024, 5, 10),
            description: None,
            reference_number: None,
            owner_id: owner,
            property_id: None,
            is_reconciled: true,
        })
        .unwrap();

    let bank = ledger.get(owner, primary).unwrap();
    let income = ledger.get(owner, balancing).unwrap();
    assert_eq!(bank.account, "Bank");
    assert_eq!(bank.amount, dec!(500));
    assert_eq!(income.account, "Rental Income");
    assert_eq!(income.amount, dec!(-500));
}

/// Unreconciled entries are excluded from all three statements but stay
/// visible in the raw ledger listing.
#[test]
fn test_unreconciled_entries_hidden_from_statements_only() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    let d = date(2024, 5, 10);
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(1000), d, false))
        .unwrap();

    let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
    let gen = generator(&ledger);

    assert_eq!(gen.income_statement(owner, range).unwrap().revenue, Decimal::ZERO);
    assert_eq!(gen.balance_sheet(owner, range).unwrap().assets, Decimal::ZERO);
    assert_eq!(gen.cash_flow(owner, range).unwrap().net_cash_flow, Decimal::ZERO);

    let page = ledger.list(owner, PageRequest::default()).unwrap();
    assert_eq!(page.meta.total, 1);
}

/// The inclusive range picks up entries on both boundary dates and
/// nothing outside them, down to a single-day period.
#[rstest]
#[case("2024-05-10", "2024-05-10", dec!(100))]
#[case("2024-05-10", "2024-05-11", dec!(1099))]
#[case("2024-05-11", "2024-05-11", dec!(999))]
#[case("2024-05-01", "2024-05-09", Decimal::ZERO)]
fn test_statement_range_boundaries(
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected_revenue: Decimal,
) {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(100), date(2024, 5, 10), true))
        .unwrap();
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(999), date(2024, 5, 11), true))
        .unwrap();

    let range = DateRange::parse(start, end).unwrap();
    let stmt = generator(&ledger).income_statement(owner, range).unwrap();
    assert_eq!(stmt.revenue, expected_revenue);
}

/// Owners never see each other's ledgers.
#[test]
fn test_owner_isolation() {
    let ledger = LedgerRepository::new(Database::new());
    let alice = OwnerId::new();
    let bob = OwnerId::new();
    let d = date(2024, 5, 10);
    ledger
        .create(raw_entry(alice, "Rental Income", dec!(1000), d, true))
        .unwrap();

    let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
    let stmt = generator(&ledger).income_statement(bob, range).unwrap();
    assert_eq!(stmt.revenue, Decimal::ZERO);
    assert!(ledger.list(bob, PageRequest::default()).unwrap().data.is_empty());
}

/// CSV export parses back to the same category-to-amount mapping.
#[test]
fn test_income_statement_csv_round_trip() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    let d = date(2024, 5, 10);
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(1250.75), d, true))
        .unwrap();
    ledger
        .create(raw_entry(owner, "Pest Control", dec!(200), d, true))
        .unwrap();
    ledger
        .create(raw_entry(owner, "Utilities", dec!(89.25), d, true))
        .unwrap();

    let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
    let stmt = generator(&ledger).income_statement(owner, range).unwrap();
    let bytes = CsvExporter::new().income_statement(&stmt).unwrap();

    let mut reader = csv::ReaderBuilder::new().from_reader(bytes.as_slice());
    let mut parsed = std::collections::HashMap::new();
    for record in reader.records() {
        let record = record.unwrap();
        if !record[1].is_empty() {
            parsed.insert(record[0].to_owned(), record[1].parse::<Decimal>().unwrap());
        }
    }

    assert_eq!(parsed["Total Revenue"], dec!(1250.75));
    assert_eq!(parsed["Total Cost of Sales"], dec!(200.00));
    assert_eq!(parsed["Gross Income"], dec!(1050.75));
    assert_eq!(parsed["Total Overhead Expenses"], dec!(89.25));
    assert_eq!(parsed["Net Income"], dec!(961.50));
}

/// Cash flow wires real stored balances into the watch-list deltas.
#[test]
fn test_cash_flow_watch_list_from_store() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    // Opening AR balance before the period.
    ledger
        .create(raw_entry(owner, "Accounts Receivable", dec!(100), date(2024, 4, 15), true))
        .unwrap();
    // AR grows inside the period.
    ledger
        .create(raw_entry(owner, "Accounts Receivable", dec!(250), date(2024, 5, 10), true))
        .unwrap();

    let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
    let stmt = generator(&ledger).cash_flow(owner, range).unwrap();
    let ar = stmt
        .operating_changes
        .iter()
        .find(|l| l.label == "Increase (Decrease) in Accounts Receivable")
        .unwrap();
    assert_eq!(ar.amount, dec!(250));
}

/// Since-inception retained earnings adds pre-period history to the
/// period delta.
#[test]
fn test_since_inception_retained_earnings() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(400), date(2024, 4, 15), true))
        .unwrap();
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(100), date(2024, 5, 10), true))
        .unwrap();

    let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();

    let delta = StatementGenerator::new(ledger.clone(), RetainedEarningsBasis::PeriodDelta)
        .balance_sheet(owner, range)
        .unwrap();
    assert_eq!(delta.retained_earnings, dec!(100));

    let inception = StatementGenerator::new(ledger, RetainedEarningsBasis::SinceInception)
        .balance_sheet(owner, range)
        .unwrap();
    assert_eq!(inception.retained_earnings, dec!(500));
}

/// The overview combines the three statements' headline figures.
#[test]
fn test_financial_overview() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    let d = date(2024, 5, 10);
    ledger
        .create(raw_entry(owner, "Bank", dec!(2000), d, true))
        .unwrap();
    ledger
        .create(raw_entry(owner, "Rental Income", dec!(2000), d, true))
        .unwrap();

    let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
    let overview = generator(&ledger).financial_overview(owner, range).unwrap();
    assert_eq!(overview.total_assets, dec!(2000));
    assert_eq!(overview.net_income, dec!(2000));
    assert_eq!(overview.net_cash_flow, dec!(2000));
}

/// Deleting one leg of a pair is a hard delete of that row alone.
#[test]
fn test_hard_delete() {
    let ledger = LedgerRepository::new(Database::new());
    let owner = OwnerId::new();
    let [primary, balancing] = ledger
        .post(PostingInput {
            account: "Utilities".to_owned(),
            amount: dec!(75),
            transaction_date: date(2024, 5, 10),
            description: None,
            reference_number: None,
            owner_id: owner,
            property_id: None,
            is_reconciled: true,
        })
        .unwrap();

    ledger.delete(owner, primary).unwrap();
    assert!(ledger.get(owner, primary).is_err());
    assert!(ledger.get(owner, balancing).is_ok());

    // The unknown property id path stays a not-found, not a panic.
    let missing = ledger.record_property_tax(owner, PropertyId::new(), date(2024, 5, 11));
    assert!(missing.is_err());
}

fn posting_account() -> impl Strategy<Value = String> {
    proptest::sample::select(vec![
        "Rental Income".to_owned(),
        "Parking Fees".to_owned(),
        "Utilities".to_owned(),
        "Pest Control".to_owned(),
        "Accounts Receivable".to_owned(),
        "Mortgage Payable".to_owned(),
        "Bank".to_owned(),
    ])
}

proptest! {
    /// Any sequence of posts leaves the stored ledger summing to zero.
    #[test]
    fn prop_stored_ledger_sums_to_zero(
        posts in proptest::collection::vec(
            (posting_account(), -100_000i64..100_000i64),
            0..10,
        ),
    ) {
        let ledger = LedgerRepository::new(Database::new());
        let owner = OwnerId::new();
        for (account, cents) in posts {
            ledger
                .post(PostingInput {
                    account,
                    amount: Decimal::new(cents, 2),
                    transaction_date: date(2024, 5, 10),
                    description: None,
                    reference_number: None,
                    owner_id: owner,
                    property_id: None,
                    is_reconciled: true,
                })
                .unwrap();
        }

        let range = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
        let total: Decimal = ledger
            .reconciled_in_range(owner, range)
            .unwrap()
            .iter()
            .map(|e| e.amount)
            .sum();
        prop_assert_eq!(total, Decimal::ZERO);
    }
}
