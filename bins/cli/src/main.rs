//! Rentfolio demo CLI.
//!
//! Seeds a sample month of ledger activity, then prints the income
//! statement, balance sheet, and cash flow statement as CSV.
//!
//! Usage: cargo run --bin rentfolio [START END]
//! with dates in `YYYY-MM-DD`; defaults to the seeded demo month.

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentfolio_core::export::CsvExporter;
use rentfolio_core::ledger::PostingInput;
use rentfolio_shared::config::AppConfig;
use rentfolio_shared::types::{DateRange, OwnerId};
use rentfolio_store::{Database, LedgerRepository, NewProperty, PropertyRepository, StatementGenerator};

/// Month covered by the seeded demo data.
const DEMO_START: &str = "2024-05-01";
const DEMO_END: &str = "2024-05-31";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentfolio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let range = range_from_args().context("Failed to parse date arguments")?;

    let db = Database::new();
    let ledger = LedgerRepository::new(std::sync::Arc::clone(&db));
    let properties = PropertyRepository::new(db);
    let owner = OwnerId::new();

    seed_demo_ledger(&ledger, &properties, owner)?;

    let generator = StatementGenerator::new(
        ledger.clone(),
        config.reporting.retained_earnings_basis,
    );
    let exporter = CsvExporter::new();

    let income = generator.income_statement(owner, range)?;
    println!("=== Income Statement ===");
    print_csv(exporter.income_statement(&income)?)?;

    let sheet = generator.balance_sheet(owner, range)?;
    let entries = ledger.reconciled_in_range(owner, range)?;
    println!("=== Balance Sheet ===");
    print_csv(exporter.balance_sheet(&sheet, &entries)?)?;

    let cash = generator.cash_flow(owner, range)?;
    println!("=== Cash Flow Statement ===");
    print_csv(exporter.cash_flow(&cash)?)?;

    let overview = generator.financial_overview(owner, range)?;
    info!(
        total_assets = %overview.total_assets,
        net_income = %overview.net_income,
        net_cash_flow = %overview.net_cash_flow,
        "financial overview"
    );

    Ok(())
}

/// Period from the first two positional arguments, falling back to the
/// seeded demo month.
fn range_from_args() -> anyhow::Result<DateRange> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (start, end) = match args.as_slice() {
        [start, end] => (start.as_str(), end.as_str()),
        [] => (DEMO_START, DEMO_END),
        _ => anyhow::bail!("expected zero or two date arguments (START END)"),
    };
    Ok(DateRange::parse(start, end)?)
}

/// Posts one month of sample activity: rent collected, a few operating
/// bills, a mortgage draw, and a property-tax charge.
fn seed_demo_ledger(
    ledger: &LedgerRepository,
    properties: &PropertyRepository,
    owner: OwnerId,
) -> anyhow::Result<()> {
    let seed: [(&str, i64, u32); 6] = [
        ("Rental Income", 2400, 3),
        ("Parking Fees", 150, 5),
        ("Utilities", 280, 8),
        ("Pest Control", 120, 12),
        ("Property Management Fees", 240, 15),
        ("Mortgage Payable", 1800, 20),
    ];
    for (account, dollars, day) in seed {
        ledger.post(PostingInput {
            account: account.to_owned(),
            amount: Decimal::from(dollars),
            transaction_date: demo_date(day)?,
            description: Some(format!("Demo: {account}")),
            reference_number: None,
            owner_id: owner,
            property_id: None,
            is_reconciled: true,
        })?;
    }

    let property = properties.create(NewProperty {
        owner_id: owner,
        title: "12 Elm Street".to_owned(),
        assessed_value: Some(Decimal::from(180_000)),
        tax_rate_percent: Some(Decimal::new(125, 2)),
    })?;
    ledger.record_property_tax(owner, property.id, demo_date(25)?)?;

    info!(%owner, "seeded demo ledger");
    Ok(())
}

fn demo_date(day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 5, day).context("invalid demo date")
}

fn print_csv(bytes: Vec<u8>) -> anyhow::Result<()> {
    let text = String::from_utf8(bytes).context("csv output was not valid UTF-8")?;
    println!("{text}");
    Ok(())
}
