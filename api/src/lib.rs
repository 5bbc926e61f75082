//! This crate contains the platform-independent types shared by the ui and
//! launcher crates: preferences, configuration and exchange-rate providers.

pub mod config;
pub mod exchange_rates;
pub mod prefs;
pub mod rate_providers;

use thiserror::Error;

/// Failure of an outbound request made by a rate provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// The request never produced a response (DNS, TLS, connection, CORS...).
    #[error("{0}")]
    Network(String),
    /// A response arrived but its body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            Self::Http {
                status: status.as_u16(),
            }
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
