//! Error types for the aggregation engine.

mod aggregate_error;

pub use aggregate_error::{AggregateError, Result};
