//! Aggregation Engine Core
//!
//! Implementations of the four pipeline stages:
//! - Record filter (indicator / location / date-range selection)
//! - Monthly grouper (calendar bucketing with sum or average reduction)
//! - Geographic resolver (country name to continent, reporting counts)
//! - Series assembler (merged, ordered, gap-free chart series)
//!
//! Every stage is a pure function of its inputs; nothing here retains state
//! between invocations or mutates a caller's records.

pub mod archive;
pub mod assemble;
pub mod filter;
pub mod geo;
pub mod ingest;
pub mod monthly;

pub use archive::{archive_metric_values, MetricObservation};
pub use assemble::SeriesAssembler;
pub use filter::RecordFilter;
pub use geo::{ContinentMap, GeographicResolver};
pub use ingest::{archive_from_json, locations_from_json, predictions_from_json};
pub use monthly::MonthlyGrouper;

// Re-export from API for convenience
pub use aggregate_api::{
    ContinentCountConfig, GapMode, RecordFilterConfig, ReducerKind, RoundingMode, RoundingPolicy,
};

// Re-export SPI types and traits
pub use aggregate_spi::{
    parse_calendar_date, AggregateError, AggregatedSeries, ArchiveRecord, Continent,
    ContinentResolver, Location, LocationTable, PeriodKey, PredictionRecord, Result, SeriesGroup,
    TimedValue, ARCHIVE_METRICS,
};
