//! Data models for epidemiological time series.

mod continent;
mod date;
mod record;
mod series;

pub use continent::Continent;
pub use date::{parse_calendar_date, PeriodKey};
pub use record::{ArchiveRecord, Location, LocationTable, PredictionRecord, ARCHIVE_METRICS};
pub use series::{AggregatedSeries, SeriesGroup};
