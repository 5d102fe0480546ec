//! # aggregate
//!
//! A pure, stateless aggregation engine for epidemiological time series.
//! Ingests arrays of loosely-typed prediction or archive records plus a
//! location reference table, and produces ordered, densely-keyed series
//! ready for a charting layer.
//!
//! The engine composes four stages -- filter, monthly grouper, geographic
//! resolver, series assembler -- and [`pipeline`] offers one-call
//! combinations of them for the common dashboard views.

pub mod pipeline;

pub use aggregate_facade::*;
pub use pipeline::{
    archive_metric_series, continent_spread, geographic_spread_series, monthly_indicator_series,
    per_country_series, per_model_series, COUNTRIES_REPORTING,
};
