use super::quote::QuoteName;
use thiserror::Error;

/// Failure to acquire a full set of quotes.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Failed to fetch {quote} quote: {reason:#}")]
    FetchFailure {
        quote: QuoteName,
        reason: anyhow::Error,
    },
}

/// Reasons a calculation is not ready.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("Invalid {field}: '{value}' is not a finite number")]
    InvalidInput { field: &'static str, value: String },

    #[error("No rate available for {0}")]
    RateUnavailable(QuoteName),

    #[error("Result is too large to display")]
    OutOfRange,
}
