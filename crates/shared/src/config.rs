//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
///
/// Loaded once at process start; the chart of accounts itself is static
/// data compiled into the core crate, so configuration only carries the
/// reporting knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// How balance-sheet retained earnings are computed.
    #[serde(default)]
    pub retained_earnings_basis: RetainedEarningsBasis,
    /// Currency symbol for display formatting.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Default page size for ledger listings.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Basis for the balance-sheet retained-earnings figure.
///
/// The historical behavior sums revenue, expenses, and distributions over
/// the *filtered* date range only, which is a period delta rather than a
/// true point-in-time balance. That behavior is preserved as the default;
/// `SinceInception` adds the opening balance accumulated before the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetainedEarningsBasis {
    /// Range-filtered sum only (observed legacy behavior).
    #[default]
    PeriodDelta,
    /// Opening balance before the range plus the period delta.
    SinceInception,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_per_page() -> u32 {
    20
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            retained_earnings_basis: RetainedEarningsBasis::default(),
            currency_symbol: default_currency_symbol(),
            per_page: default_per_page(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RENTFOLIO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
