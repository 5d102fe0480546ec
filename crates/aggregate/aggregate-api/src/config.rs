//! Aggregation configuration types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Reducers
// ============================================================================

/// Bucket reduction function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReducerKind {
    /// Accumulate contributions; a missing value contributes 0.
    #[default]
    Sum,
    /// Divide the accumulated sum by the observation count at finalization.
    /// Missing values are excluded from the denominator entirely, they never
    /// count as zero-valued observations.
    Average,
}

// ============================================================================
// Rounding
// ============================================================================

/// Presentation rounding applied to finalized bucket values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundingMode {
    /// Leave values as computed.
    #[default]
    None,
    /// Round to the nearest integer (count-like indicators).
    Integer,
    /// Round to 2 decimal places (continuous indicators).
    TwoDecimals,
}

impl RoundingMode {
    /// Apply this mode to a value.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            RoundingMode::None => value,
            RoundingMode::Integer => value.round(),
            RoundingMode::TwoDecimals => (value * 100.0).round() / 100.0,
        }
    }
}

/// Per-indicator rounding rules.
///
/// Rounding is a presentation contract configured per indicator name, not
/// hard-coded per field. The default policy maps the count-like
/// `countries_reporting` indicator to integers and the continuous case/death
/// metrics to 2 decimals; unknown indicators fall back to `default_mode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundingPolicy {
    pub default_mode: RoundingMode,
    pub per_indicator: BTreeMap<String, RoundingMode>,
}

impl RoundingPolicy {
    /// Policy with no rules: everything uses `default_mode`.
    pub fn uniform(default_mode: RoundingMode) -> Self {
        Self {
            default_mode,
            per_indicator: BTreeMap::new(),
        }
    }

    pub fn with_rule(mut self, indicator: impl Into<String>, mode: RoundingMode) -> Self {
        self.per_indicator.insert(indicator.into(), mode);
        self
    }

    /// Rounding mode for an indicator name.
    pub fn mode_for(&self, indicator: &str) -> RoundingMode {
        self.per_indicator
            .get(indicator)
            .copied()
            .unwrap_or(self.default_mode)
    }

    /// Round a finalized value for an indicator.
    pub fn round(&self, indicator: &str, value: f64) -> f64 {
        self.mode_for(indicator).apply(value)
    }
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        let mut per_indicator = BTreeMap::new();
        per_indicator.insert("countries_reporting".to_string(), RoundingMode::Integer);
        for metric in [
            "total_cases",
            "new_cases",
            "total_deaths",
            "new_deaths",
            "hosp_patients",
        ] {
            per_indicator.insert(metric.to_string(), RoundingMode::TwoDecimals);
        }
        Self {
            default_mode: RoundingMode::TwoDecimals,
            per_indicator,
        }
    }
}

// ============================================================================
// Gap Semantics
// ============================================================================

/// How a label absent from a group's buckets renders in assembled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GapMode {
    /// Absent labels yield `0.0`; chart axes stay aligned with no gaps.
    #[default]
    ZeroFill,
    /// Absent labels yield `null`; renderers treat it as "no data".
    NullGap,
}

// ============================================================================
// Record Filter
// ============================================================================

/// Predicate configuration for the record filter.
///
/// Every criterion is optional; an unset criterion passes all records. The
/// date range is inclusive on both ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFilterConfig {
    pub indicator: Option<String>,
    pub locations: Option<BTreeSet<i64>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub model_name: Option<String>,
    pub horizon: Option<i64>,
}

impl RecordFilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = Some(indicator.into());
        self
    }

    pub fn with_locations(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.locations = Some(ids.into_iter().collect());
        self
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = Some(horizon);
        self
    }
}

// ============================================================================
// Continent Counts
// ============================================================================

/// Configuration for ranked per-continent counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinentCountConfig {
    /// A location reports when its aggregated value exceeds this threshold.
    pub threshold: f64,
    /// Keep only the top N continents by count (None keeps all).
    pub top_n: Option<usize>,
}

impl ContinentCountConfig {
    pub fn new() -> Self {
        Self {
            threshold: 0.0,
            top_n: None,
        }
    }

    /// The dashboard default: all continents above zero, top 6.
    pub fn dashboard() -> Self {
        Self {
            threshold: 0.0,
            top_n: Some(6),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }
}

impl Default for ContinentCountConfig {
    fn default() -> Self {
        Self::new()
    }
}
