//! Defines the trait and implementation for external exchange-rate providers.

use crate::exchange_rates::first_table_rates;
use crate::exchange_rates::CurrencyRate;
use crate::ApiError;
use dioxus_logger::tracing::debug;

/// A trait for any service that can provide a list of exchange rates.
#[allow(async_fn_in_trait)]
pub trait RatesProvider {
    /// Fetches at most `limit` rates, in the order the service lists them.
    ///
    /// Issues exactly one request; never retries.
    async fn get_rates(&self, limit: usize) -> Result<Vec<CurrencyRate>, ApiError>;
}

/// Provides rates from the public API of the Polish National Bank.
pub mod nbp {
    use super::*;
    use serde_json::Value;

    /// An implementation of the `RatesProvider` trait for the NBP table API.
    pub struct Nbp {
        endpoint: String,
    }

    impl Nbp {
        pub fn new(endpoint: impl Into<String>) -> Self {
            Self {
                endpoint: endpoint.into(),
            }
        }
    }

    impl RatesProvider for Nbp {
        async fn get_rates(&self, limit: usize) -> Result<Vec<CurrencyRate>, ApiError> {
            let client = reqwest::Client::new();

            // 1. Send; transport errors surface as ApiError::Network.
            let resp = client
                .get(&self.endpoint)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await?;

            // 2. Any non-2xx status is an ApiError::Http carrying the code.
            let status = resp.status();
            if !status.is_success() {
                return Err(ApiError::Http {
                    status: status.as_u16(),
                });
            }

            // 3. Parse generically; the shape is checked while extracting.
            let body = resp.json::<Value>().await?;
            let rates = first_table_rates(&body, limit);
            debug!("nbp returned {} rates (limit {})", rates.len(), limit);

            Ok(rates)
        }
    }
}
