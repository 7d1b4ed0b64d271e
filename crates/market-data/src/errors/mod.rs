//! Error types for the market data crate.
//!
//! This module provides [`FetchError`], the error enum for all fetch
//! operations against the property analytics API. Fetch failures are
//! surfaced to the caller exactly once; nothing in this crate retries.

use thiserror::Error;

/// Errors that can occur while fetching property-market data.
///
/// Every variant is user-visible: the dashboard layer reports the message
/// and keeps whatever snapshot it already had.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API credentials are missing.
    /// Checked before any request is sent; no I/O happens in this state.
    #[error("API key and domain are not configured")]
    NotConfigured,

    /// The request URL could not be built from the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// A network-level failure: DNS, connect, TLS, or timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("HTTP {status} from {endpoint}")]
    Status {
        /// The endpoint path that failed
        endpoint: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The response body could not be decoded into the expected records.
    #[error("Failed to decode {endpoint} response: {message}")]
    Decode {
        /// The endpoint path whose body failed to decode
        endpoint: String,
        /// The underlying decode error
        message: String,
    },
}

impl FetchError {
    /// True when the failure happened before any bytes reached the API,
    /// i.e. the caller can fix it locally (credentials, base URL).
    pub fn is_local(&self) -> bool {
        matches!(self, Self::NotConfigured | Self::InvalidUrl(_))
    }
}
