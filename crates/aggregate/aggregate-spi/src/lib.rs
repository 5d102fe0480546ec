//! Aggregation Engine Service Provider Interface
//!
//! Defines the types, traits, and errors shared by every stage of the
//! epidemiological time-series aggregation engine.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ContinentResolver, TimedValue};
pub use error::{AggregateError, Result};
pub use model::{
    parse_calendar_date, AggregatedSeries, ArchiveRecord, Continent, Location, LocationTable,
    PeriodKey, PredictionRecord, SeriesGroup, ARCHIVE_METRICS,
};

// ============================================================================
// Tests
// ============================================================================
