//! Series assembler implementation.
//!
//! Merges per-group bucket maps into a single [`AggregatedSeries`] over the
//! union of all keys, so every group is defined for every label and chart
//! axes stay aligned.

use aggregate_api::{GapMode, RoundingMode};
use aggregate_spi::{AggregatedSeries, Continent, PeriodKey, SeriesGroup};
use std::collections::{BTreeMap, BTreeSet};

/// Series assembler.
///
/// Output is deterministic: labels are the sorted union of bucket keys,
/// groups appear in sorted label order, and rounding is applied after
/// reduction. A label absent from a group's buckets yields `0` under
/// [`GapMode::ZeroFill`] and `null` under [`GapMode::NullGap`].
#[derive(Debug, Clone, Default)]
pub struct SeriesAssembler {
    gap_mode: GapMode,
    rounding: RoundingMode,
}

impl SeriesAssembler {
    pub fn new(gap_mode: GapMode, rounding: RoundingMode) -> Self {
        Self { gap_mode, rounding }
    }

    pub fn with_rounding(rounding: RoundingMode) -> Self {
        Self {
            gap_mode: GapMode::default(),
            rounding,
        }
    }

    /// Merge per-group monthly buckets into one series.
    pub fn assemble(
        &self,
        per_group: &BTreeMap<String, BTreeMap<PeriodKey, f64>>,
    ) -> AggregatedSeries {
        let universe: BTreeSet<PeriodKey> = per_group
            .values()
            .flat_map(|buckets| buckets.keys().copied())
            .collect();
        if universe.is_empty() {
            return AggregatedSeries::empty();
        }

        let labels: Vec<String> = universe.iter().map(|key| key.to_string()).collect();
        let datasets = per_group
            .iter()
            .map(|(group, buckets)| {
                let data = universe
                    .iter()
                    .map(|key| match buckets.get(key) {
                        Some(value) => Some(self.rounding.apply(*value)),
                        None => match self.gap_mode {
                            GapMode::ZeroFill => Some(0.0),
                            GapMode::NullGap => None,
                        },
                    })
                    .collect();
                SeriesGroup::new(group.clone(), data)
            })
            .collect();

        AggregatedSeries::new(labels, datasets)
    }

    /// Single-group convenience wrapper.
    pub fn assemble_single(
        &self,
        label: &str,
        buckets: &BTreeMap<PeriodKey, f64>,
    ) -> AggregatedSeries {
        let mut per_group = BTreeMap::new();
        per_group.insert(label.to_string(), buckets.clone());
        self.assemble(&per_group)
    }

    /// Bar series from ranked continent counts, preserving their rank order.
    ///
    /// Counts are already dense and integral, so gap mode and rounding do not
    /// apply; this is an associated function rather than a method.
    pub fn assemble_continents(
        label: &str,
        counts: &[(Continent, usize)],
    ) -> AggregatedSeries {
        if counts.is_empty() {
            return AggregatedSeries::empty();
        }
        let labels = counts.iter().map(|(c, _)| c.to_string()).collect();
        let data = counts.iter().map(|(_, n)| Some(*n as f64)).collect();
        AggregatedSeries::new(labels, vec![SeriesGroup::new(label, data)])
    }
}
