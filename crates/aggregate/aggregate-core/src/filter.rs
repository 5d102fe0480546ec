//! Record filter implementation.
//!
//! Selects the prediction records matching an indicator, a location subset,
//! and an inclusive date range. Order-preserving and side-effect free; safe
//! to call repeatedly with overlapping predicates.

use aggregate_api::RecordFilterConfig;
use aggregate_spi::{AggregateError, PredictionRecord, Result};
use log::debug;

/// Record filter.
///
/// Unset criteria pass every record. Records whose date is missing or
/// unparseable are dropped rather than failing the whole aggregation.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    config: RecordFilterConfig,
}

impl RecordFilter {
    pub fn new(config: RecordFilterConfig) -> Self {
        Self { config }
    }

    /// Validate the configured date range, if any.
    ///
    /// A start after its end is a caller contract violation, not a data
    /// issue, and fails fast.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.config.start_date, self.config.end_date) {
            if start > end {
                return Err(AggregateError::InvalidDateRange {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Select matching records, preserving input order.
    pub fn apply(&self, records: &[PredictionRecord]) -> Vec<PredictionRecord> {
        let mut dropped = 0usize;
        let selected: Vec<PredictionRecord> = records
            .iter()
            .filter(|record| match record.calendar_date() {
                Some(date) => self.matches(record, date),
                None => {
                    dropped += 1;
                    false
                }
            })
            .cloned()
            .collect();

        if dropped > 0 {
            debug!("dropped {} record(s) with missing or unparseable dates", dropped);
        }
        selected
    }

    fn matches(&self, record: &PredictionRecord, date: chrono::NaiveDate) -> bool {
        if let Some(indicator) = &self.config.indicator {
            if record.indicateur != *indicator {
                return false;
            }
        }
        if let Some(locations) = &self.config.locations {
            if !locations.contains(&record.location_id) {
                return false;
            }
        }
        if let Some(start) = self.config.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.config.end_date {
            if date > end {
                return false;
            }
        }
        if let Some(model) = &self.config.model_name {
            if record.model_name.as_deref() != Some(model.as_str()) {
                return false;
            }
        }
        if let Some(horizon) = self.config.horizon {
            if record.horizon != Some(horizon) {
                return false;
            }
        }
        true
    }
}
