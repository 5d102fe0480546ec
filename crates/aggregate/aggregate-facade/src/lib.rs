//! Aggregation Engine Facade
//!
//! Unified re-exports for the aggregate module.
//!
//! This facade provides a single entry point for the whole engine:
//! - `aggregate_spi` - Record/series types, traits, and errors
//! - `aggregate_api` - Configuration types
//! - `aggregate_core` - Stage implementations
//!
//! # Example
//!
//! ```
//! use aggregate_facade::prelude::*;
//!
//! let records = vec![
//!     PredictionRecord::new("new_cases", 1, "2025-01-05", Some(100.0)),
//!     PredictionRecord::new("new_cases", 1, "2025-01-20", Some(50.0)),
//! ];
//! let buckets = MonthlyGrouper::sum().group(&records);
//! let series = SeriesAssembler::default().assemble_single("new_cases", &buckets);
//! assert_eq!(series.labels, vec!["2025-01"]);
//! ```

// Re-export everything from core (which includes API and SPI)
pub use aggregate_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use aggregate_spi::{ContinentResolver, TimedValue};

    // Model types
    pub use aggregate_spi::{
        AggregatedSeries, ArchiveRecord, Continent, Location, LocationTable, PeriodKey,
        PredictionRecord, SeriesGroup,
    };

    // Configuration
    pub use aggregate_api::{
        ContinentCountConfig, GapMode, RecordFilterConfig, ReducerKind, RoundingMode,
        RoundingPolicy,
    };

    // Stages
    pub use aggregate_core::{
        archive_metric_values, ContinentMap, GeographicResolver, MonthlyGrouper, RecordFilter,
        SeriesAssembler,
    };

    // Errors
    pub use aggregate_spi::{AggregateError, Result};
}
