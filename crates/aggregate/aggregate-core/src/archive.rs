//! Archive metric views.
//!
//! Adapts one named metric of a set of [`ArchiveRecord`]s to the
//! [`TimedValue`] contract so the monthly grouper can bucket archive rows the
//! same way it buckets predictions.

use aggregate_spi::{ArchiveRecord, TimedValue};
use chrono::NaiveDate;

/// One archive row narrowed to a single metric.
#[derive(Debug, Clone)]
pub struct MetricObservation {
    date: Option<NaiveDate>,
    value: Option<f64>,
}

impl TimedValue for MetricObservation {
    fn calendar_date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Narrow archive rows to one metric, within an optional inclusive window.
///
/// Rows with unparseable dates are dropped. A present-but-null metric stays a
/// missing observation; the reducer decides what that means.
pub fn archive_metric_values(
    records: &[ArchiveRecord],
    metric: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<MetricObservation> {
    records
        .iter()
        .filter_map(|record| {
            let date = record.calendar_date()?;
            if let Some(start) = start {
                if date < start {
                    return None;
                }
            }
            if let Some(end) = end {
                if date > end {
                    return None;
                }
            }
            Some(MetricObservation {
                date: Some(date),
                value: record.metric(metric).filter(|v| v.is_finite()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonthlyGrouper;
    use aggregate_spi::PeriodKey;

    fn rows() -> Vec<ArchiveRecord> {
        vec![
            ArchiveRecord::new("2025-01-05").with_metric("new_cases", Some(10.0)),
            ArchiveRecord::new("2025-01-20").with_metric("new_cases", Some(20.0)),
            ArchiveRecord::new("2025-02-01").with_metric("new_cases", None),
            ArchiveRecord::new("bad-date").with_metric("new_cases", Some(99.0)),
        ]
    }

    #[test]
    fn test_metric_view_drops_bad_dates() {
        let values = archive_metric_values(&rows(), "new_cases", None, None);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_metric_view_window() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let values = archive_metric_values(&rows(), "new_cases", Some(start), Some(end));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_archive_monthly_sum() {
        let values = archive_metric_values(&rows(), "new_cases", None, None);
        let buckets = MonthlyGrouper::sum().group(&values);
        assert_eq!(buckets[&PeriodKey::new(2025, 1)], 30.0);
        // Null metric still sums as zero under Sum.
        assert_eq!(buckets[&PeriodKey::new(2025, 2)], 0.0);
    }

    #[test]
    fn test_absent_metric_is_missing_observation() {
        let values = archive_metric_values(&rows(), "hosp_patients", None, None);
        assert!(values.iter().all(|v| v.value().is_none()));
    }
}
