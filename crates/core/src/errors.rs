//! Core error types for the property analytics engine.
//!
//! Fetch failures from the market-data crate are wrapped here so callers deal
//! with a single error type. Empty data sets are never errors anywhere in this
//! crate; aggregates over nothing degrade to zero-valued metrics instead.

use thiserror::Error;

use propmarket_market_data::FetchError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failures_keep_their_context() {
        let error = Error::from(FetchError::Status {
            endpoint: "/api/pmx/all".to_string(),
            status: 502,
        });

        assert_eq!(error.to_string(), "Fetch failed: HTTP 502 from /api/pmx/all");

        // The presentation layer receives errors as plain strings.
        let message: String = error.into();
        assert_eq!(message, "Fetch failed: HTTP 502 from /api/pmx/all");
    }
}
