//! Raw record types as delivered by the data-fetch layer.

use crate::model::parse_calendar_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Archive metric names recognized by the engine.
pub const ARCHIVE_METRICS: [&str; 5] = [
    "total_cases",
    "new_cases",
    "total_deaths",
    "new_deaths",
    "hosp_patients",
];

/// One model output for one indicator, location, and predicted date.
///
/// Field names follow the wire shape of the prediction endpoint. Dates stay
/// raw strings: a malformed date marks the row for exclusion downstream, it
/// never fails deserialization of the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub indicateur: String,
    pub location_id: i64,
    pub date_predite: String,
    pub valeur_predite: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_generation: Option<String>,
}

impl PredictionRecord {
    pub fn new(
        indicateur: impl Into<String>,
        location_id: i64,
        date_predite: impl Into<String>,
        valeur_predite: Option<f64>,
    ) -> Self {
        Self {
            indicateur: indicateur.into(),
            location_id,
            date_predite: date_predite.into(),
            valeur_predite,
            model_name: None,
            horizon: None,
            date_generation: None,
        }
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Calendar date of the prediction, `None` if missing or unparseable.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date_predite)
    }
}

/// One archive row for a single location: a date plus a bag of metric values.
///
/// Missing metrics stay absent and a present-but-null metric stays `None`;
/// neither is coerced to zero here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveRecord {
    pub date: String,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, Option<f64>>,
}

impl ArchiveRecord {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: Option<f64>) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Calendar date of the row, `None` if missing or unparseable.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// Value of a named metric, if present and non-null.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied().flatten()
    }
}

/// One row of the location reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: i64,
    pub location_name: String,
}

impl Location {
    pub fn new(location_id: i64, location_name: impl Into<String>) -> Self {
        Self {
            location_id,
            location_name: location_name.into(),
        }
    }
}

/// Snapshot of the location reference table, indexed by id.
///
/// Ids are unique within a snapshot; on duplicate ids the last row wins.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    by_id: BTreeMap<i64, String>,
}

impl LocationTable {
    pub fn new(rows: Vec<Location>) -> Self {
        let by_id = rows
            .into_iter()
            .map(|row| (row.location_id, row.location_name))
            .collect();
        Self { by_id }
    }

    /// Display name for a location id, `None` when the id is not in this
    /// snapshot (missing reference data, distinct from an unmapped name).
    pub fn name_of(&self, location_id: i64) -> Option<&str> {
        self.by_id.get(&location_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_record_builders() {
        let record = PredictionRecord::new("new_cases", 3, "2025-02-01", Some(12.0))
            .with_model("arima_v2")
            .with_horizon(7);
        assert_eq!(record.model_name.as_deref(), Some("arima_v2"));
        assert_eq!(record.horizon, Some(7));
    }

    #[test]
    fn test_archive_record_metric_access() {
        let row = ArchiveRecord::new("2025-02-01")
            .with_metric("new_cases", Some(10.0))
            .with_metric("hosp_patients", None);
        assert_eq!(row.metric("new_cases"), Some(10.0));
        assert_eq!(row.metric("hosp_patients"), None);
        assert_eq!(row.metric("absent"), None);
    }

    #[test]
    fn test_location_table_duplicate_id_last_wins() {
        let table = LocationTable::new(vec![
            Location::new(1, "Old"),
            Location::new(1, "New"),
        ]);
        assert_eq!(table.name_of(1), Some("New"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_archive_record_deserializes_flat_metrics() {
        let json = r#"{"date":"2025-01-01","new_cases":5.0,"new_deaths":null}"#;
        let row: ArchiveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.metric("new_cases"), Some(5.0));
        assert_eq!(row.metric("new_deaths"), None);
        assert!(row.metrics.contains_key("new_deaths"));
    }
}
