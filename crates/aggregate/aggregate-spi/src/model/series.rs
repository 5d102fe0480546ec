//! Chart-ready aggregated series.

use serde::{Deserialize, Serialize};

/// One sub-series of an [`AggregatedSeries`], index-aligned with its labels.
///
/// Slots are `Option<f64>` so a single shape serves both gap semantics:
/// zero-filled series carry `Some(0.0)`, gap series carry `None`, which
/// serializes to JSON `null`. Renderers must treat `null` as "no data" and
/// never interpolate numerically across it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub label: String,
    pub data: Vec<Option<f64>>,
}

impl SeriesGroup {
    pub fn new(label: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

/// Ordered, densely-keyed series ready for a charting layer.
///
/// `labels` is the shared axis (period keys or continent names);
/// `datasets[i].data[j]` corresponds to `labels[j]` and every dataset has
/// exactly `labels.len()` entries. Serializes to the chart wire shape
/// `{ "labels": [...], "datasets": [{ "label": ..., "data": [...] }] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesGroup>,
}

impl AggregatedSeries {
    /// The empty series: the "no data" state, not an error.
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }

    pub fn new(labels: Vec<String>, datasets: Vec<SeriesGroup>) -> Self {
        Self { labels, datasets }
    }

    /// Value sequence for a group label, if present.
    pub fn group(&self, label: &str) -> Option<&[Option<f64>]> {
        self.datasets
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.data.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.is_empty()
    }
}

impl Default for AggregatedSeries {
    fn default() -> Self {
        Self::empty()
    }
}
