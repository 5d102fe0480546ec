//! End-to-end tests for the aggregate crate
//!
//! Raw REST payloads in, serialized chart series out, using only this
//! crate's API.

use aggregate::{
    continent_spread, geographic_spread_series, locations_from_json, monthly_indicator_series,
    predictions_from_json, ContinentCountConfig, GapMode, GeographicResolver, LocationTable,
    RecordFilterConfig, ReducerKind, RoundingPolicy,
};

fn predictions_payload() -> &'static str {
    r#"[
        {"indicateur":"new_cases","location_id":9,"date_predite":"2025-01-05","valeur_predite":120.5,"model_name":"arima_v2","horizon":7},
        {"indicateur":"new_cases","location_id":9,"date_predite":"2025-01-19T12:00:00","valeur_predite":80.25,"model_name":"arima_v2","horizon":7},
        {"indicateur":"new_cases","location_id":12,"date_predite":"2025-02-02","valeur_predite":40.0,"model_name":"arima_v2","horizon":7},
        {"indicateur":"new_deaths","location_id":9,"date_predite":"2025-01-10","valeur_predite":2.5,"model_name":"arima_v2","horizon":7},
        {"indicateur":"countries_reporting","location_id":9,"date_predite":"2025-01-03","valeur_predite":1.0},
        {"indicateur":"countries_reporting","location_id":12,"date_predite":"2025-01-04","valeur_predite":1.0},
        {"indicateur":"countries_reporting","location_id":33,"date_predite":"2025-01-06","valeur_predite":0.0},
        {"indicateur":"new_cases","location_id":9,"date_predite":"oops","valeur_predite":999.0}
    ]"#
}

fn locations_payload() -> &'static str {
    r#"[
        {"location_id":9,"location_name":"France"},
        {"location_id":12,"location_name":"Germany"},
        {"location_id":33,"location_name":"Brazil"}
    ]"#
}

#[test]
fn test_payload_to_monthly_chart_series() {
    let records = predictions_from_json(predictions_payload()).unwrap();
    let series = monthly_indicator_series(
        &records,
        RecordFilterConfig::new().with_indicator("new_cases"),
        ReducerKind::Sum,
        &RoundingPolicy::default(),
        GapMode::ZeroFill,
    )
    .unwrap();

    // The malformed-date row is dropped; both January timestamps share a
    // bucket regardless of bare-date vs datetime form.
    assert_eq!(series.labels, vec!["2025-01", "2025-02"]);
    assert_eq!(
        series.group("new_cases"),
        Some(&[Some(200.75), Some(40.0)][..])
    );
}

#[test]
fn test_chart_series_wire_shape() {
    let records = predictions_from_json(predictions_payload()).unwrap();
    let series = monthly_indicator_series(
        &records,
        RecordFilterConfig::new().with_indicator("new_deaths"),
        ReducerKind::Sum,
        &RoundingPolicy::default(),
        GapMode::ZeroFill,
    )
    .unwrap();

    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["labels"][0], "2025-01");
    assert_eq!(json["datasets"][0]["label"], "new_deaths");
    assert_eq!(json["datasets"][0]["data"][0], 2.5);
}

#[test]
fn test_null_gap_serializes_to_json_null() {
    let records = predictions_from_json(
        r#"[
            {"indicateur":"new_cases","location_id":9,"date_predite":"2025-01-05","valeur_predite":10.0},
            {"indicateur":"new_cases","location_id":12,"date_predite":"2025-02-05","valeur_predite":20.0}
        ]"#,
    )
    .unwrap();
    let table = LocationTable::new(locations_from_json(locations_payload()).unwrap());
    let series = aggregate::per_country_series(
        &records,
        &table,
        RecordFilterConfig::new().with_indicator("new_cases"),
        ReducerKind::Sum,
        &RoundingPolicy::default(),
        GapMode::NullGap,
    )
    .unwrap();

    let json = serde_json::to_value(&series).unwrap();
    let france = json["datasets"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["label"] == "France")
        .unwrap();
    assert_eq!(france["data"][0], 10.0);
    assert!(france["data"][1].is_null());
}

#[test]
fn test_geographic_spread_rounds_to_whole_countries() {
    let records = predictions_from_json(predictions_payload()).unwrap();
    let series =
        geographic_spread_series(&records, None, None, &RoundingPolicy::default()).unwrap();

    assert_eq!(series.labels, vec!["2025-01"]);
    assert_eq!(series.group("countries_reporting"), Some(&[Some(2.0)][..]));
}

#[test]
fn test_continent_spread_end_to_end() {
    let records = predictions_from_json(predictions_payload()).unwrap();
    let table = LocationTable::new(locations_from_json(locations_payload()).unwrap());
    let resolver = GeographicResolver::default();

    let series = continent_spread(
        &records,
        &table,
        &resolver,
        &ContinentCountConfig::dashboard(),
        None,
        None,
    )
    .unwrap();

    // France and Germany reported (sum > 0); Brazil's only value is 0.
    assert_eq!(series.labels, vec!["Europe"]);
    assert_eq!(series.group("countries_reporting"), Some(&[Some(2.0)][..]));
}

#[test]
fn test_empty_payload_renders_no_data_state() {
    let records = predictions_from_json("[]").unwrap();
    let series = monthly_indicator_series(
        &records,
        RecordFilterConfig::new().with_indicator("new_cases"),
        ReducerKind::Sum,
        &RoundingPolicy::default(),
        GapMode::ZeroFill,
    )
    .unwrap();

    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["labels"].as_array().unwrap().len(), 0);
    assert_eq!(json["datasets"].as_array().unwrap().len(), 0);
}
