//! Application configuration with in-code defaults.
//!
//! The app runs in the browser, where there is no process environment, so
//! overrides are read at compile time with `option_env!`.

use std::time::Duration;

use crate::prefs::locale::DEFAULT_LOCALE;
use crate::prefs::locale::FALLBACK_LOCALE;

/// Public table A of average exchange rates from the Polish National Bank.
pub const NBP_TABLE_A_URL: &str = "https://api.nbp.pl/api/exchangerates/tables/A?format=json";

/// Immutable settings shared by the whole application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint queried by the currency table on the dashboard.
    pub rates_endpoint: String,
    /// How many rates of the first table are kept.
    pub rates_limit: usize,
    /// Artificial latency of the simulated fetch.
    pub fetch_delay: Duration,
    /// Artificial latency of the simulated save.
    pub save_delay: Duration,
    /// Locale used when nothing is stored.
    pub default_locale: String,
    /// Locale consulted when a key is missing from the active catalog.
    pub fallback_locale: String,
    pub version: &'static str,
    pub homepage: &'static str,
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables.
    ///
    /// # Environment Variables (read at build time):
    /// - `RAG_TS_RATES_ENDPOINT`: exchange-rate endpoint, defaults to NBP table A.
    /// - `RAG_TS_DEFAULT_LOCALE`: defaults to "pl".
    /// - `RAG_TS_FALLBACK_LOCALE`: defaults to "en".
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("RAG_TS_RATES_ENDPOINT"),
            option_env!("RAG_TS_DEFAULT_LOCALE"),
            option_env!("RAG_TS_FALLBACK_LOCALE"),
        )
    }

    fn from_overrides(
        rates_endpoint: Option<&str>,
        default_locale: Option<&str>,
        fallback_locale: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from);

        Self {
            rates_endpoint: non_empty(rates_endpoint)
                .unwrap_or_else(|| NBP_TABLE_A_URL.to_string()),
            rates_limit: 10,
            fetch_delay: Duration::from_millis(1500),
            save_delay: Duration::from_millis(1000),
            default_locale: non_empty(default_locale)
                .unwrap_or_else(|| DEFAULT_LOCALE.code().to_string()),
            fallback_locale: non_empty(fallback_locale)
                .unwrap_or_else(|| FALLBACK_LOCALE.code().to_string()),
            version: env!("CARGO_PKG_VERSION"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
