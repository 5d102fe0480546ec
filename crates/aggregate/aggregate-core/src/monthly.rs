//! Monthly grouper implementation.
//!
//! Buckets timed records into calendar months and reduces each bucket by sum
//! or average. Bucket maps are keyed by [`PeriodKey`], whose ordering (and
//! formatted `YYYY-MM` form) is chronological.

use aggregate_api::ReducerKind;
use aggregate_spi::{PeriodKey, TimedValue};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    sum: f64,
    count: usize,
}

/// Monthly grouper.
///
/// Under `Sum`, every dated record lands in its bucket and a missing value
/// contributes 0 (the bucket still exists). Under `Average`, only numeric
/// observations enter the sum and the denominator; a month with no numeric
/// observation produces no bucket at all rather than an artificial zero.
#[derive(Debug, Clone)]
pub struct MonthlyGrouper {
    reducer: ReducerKind,
}

impl MonthlyGrouper {
    pub fn new(reducer: ReducerKind) -> Self {
        Self { reducer }
    }

    pub fn sum() -> Self {
        Self::new(ReducerKind::Sum)
    }

    pub fn average() -> Self {
        Self::new(ReducerKind::Average)
    }

    /// Reduce records into one bucket map. Undated records are skipped.
    pub fn group<T: TimedValue>(&self, records: &[T]) -> BTreeMap<PeriodKey, f64> {
        let mut buckets: BTreeMap<PeriodKey, Bucket> = BTreeMap::new();
        for record in records {
            let Some(date) = record.calendar_date() else {
                continue;
            };
            let key = PeriodKey::from_date(date);
            match (self.reducer, record.value()) {
                (ReducerKind::Sum, value) => {
                    let bucket = buckets.entry(key).or_default();
                    bucket.sum += value.unwrap_or(0.0);
                    bucket.count += 1;
                }
                (ReducerKind::Average, Some(value)) => {
                    let bucket = buckets.entry(key).or_default();
                    bucket.sum += value;
                    bucket.count += 1;
                }
                (ReducerKind::Average, None) => {}
            }
        }
        self.finalize(buckets)
    }

    /// Reduce records into one bucket map per group key.
    ///
    /// `key_of` names the group a record belongs to; records it maps to
    /// `None` are skipped.
    pub fn group_by_key<T, F>(
        &self,
        records: &[T],
        mut key_of: F,
    ) -> BTreeMap<String, BTreeMap<PeriodKey, f64>>
    where
        T: TimedValue,
        F: FnMut(&T) -> Option<String>,
    {
        let mut grouped: BTreeMap<String, BTreeMap<PeriodKey, Bucket>> = BTreeMap::new();
        for record in records {
            let Some(date) = record.calendar_date() else {
                continue;
            };
            let Some(group) = key_of(record) else {
                continue;
            };
            let key = PeriodKey::from_date(date);
            let buckets = grouped.entry(group).or_default();
            match (self.reducer, record.value()) {
                (ReducerKind::Sum, value) => {
                    let bucket = buckets.entry(key).or_default();
                    bucket.sum += value.unwrap_or(0.0);
                    bucket.count += 1;
                }
                (ReducerKind::Average, Some(value)) => {
                    let bucket = buckets.entry(key).or_default();
                    bucket.sum += value;
                    bucket.count += 1;
                }
                (ReducerKind::Average, None) => {}
            }
        }
        grouped
            .into_iter()
            .map(|(group, buckets)| (group, self.finalize(buckets)))
            .collect()
    }

    fn finalize(&self, buckets: BTreeMap<PeriodKey, Bucket>) -> BTreeMap<PeriodKey, f64> {
        buckets
            .into_iter()
            .map(|(key, bucket)| {
                let value = match self.reducer {
                    ReducerKind::Sum => bucket.sum,
                    ReducerKind::Average => bucket.sum / bucket.count as f64,
                };
                (key, value)
            })
            .collect()
    }
}

impl Default for MonthlyGrouper {
    fn default() -> Self {
        Self::sum()
    }
}
