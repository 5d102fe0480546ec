//! Aggregation error types.
//!
//! Data-quality issues (malformed rows, unknown locations, unmapped country
//! names) are handled in-band by the stages and never surface here. These
//! variants cover caller contract violations and whole-payload ingest
//! failures only.

use thiserror::Error;

/// Aggregation engine errors.
#[derive(Debug, Clone, Error)]
pub enum AggregateError {
    /// Date range with start after end
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: String, end: String },

    /// A payload that could not be decoded at all
    #[error("Payload error: {0}")]
    PayloadError(String),
}

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AggregateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_range_display() {
        let error = AggregateError::InvalidDateRange {
            start: "2025-06-01".to_string(),
            end: "2025-01-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2025-06-01 is after 2025-01-01"
        );
    }

    #[test]
    fn test_payload_error_display() {
        let error = AggregateError::PayloadError("expected an array".to_string());
        assert_eq!(error.to_string(), "Payload error: expected an array");
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(AggregateError::PayloadError("test".to_string()));
        assert_eq!(error.to_string(), "Payload error: test");
    }
}
