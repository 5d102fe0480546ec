//! JSON ingest helpers for the REST payload shapes.
//!
//! The fetch layer delivers JSON arrays; these helpers decode them into the
//! engine's record types. A payload that is not an array of the expected
//! shape fails as a whole ([`AggregateError::PayloadError`]) -- that is a
//! caller contract violation, unlike a single malformed row, which survives
//! decoding and is dropped later by the stages.

use aggregate_spi::{AggregateError, ArchiveRecord, Location, PredictionRecord, Result};

/// Decode a prediction endpoint payload.
pub fn predictions_from_json(payload: &str) -> Result<Vec<PredictionRecord>> {
    serde_json::from_str(payload).map_err(|e| AggregateError::PayloadError(e.to_string()))
}

/// Decode an archive endpoint payload (rows for a single location).
pub fn archive_from_json(payload: &str) -> Result<Vec<ArchiveRecord>> {
    serde_json::from_str(payload).map_err(|e| AggregateError::PayloadError(e.to_string()))
}

/// Decode a location table payload.
pub fn locations_from_json(payload: &str) -> Result<Vec<Location>> {
    serde_json::from_str(payload).map_err(|e| AggregateError::PayloadError(e.to_string()))
}
