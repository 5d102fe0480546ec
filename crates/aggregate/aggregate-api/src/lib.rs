//! Aggregation Engine Configuration API
//!
//! Caller-facing configuration types: which records to keep, how to reduce a
//! bucket, how to round per indicator, and how missing months render.

mod config;

pub use config::{
    ContinentCountConfig, GapMode, RecordFilterConfig, ReducerKind, RoundingMode, RoundingPolicy,
};
