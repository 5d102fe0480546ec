//! Basic example demonstrating the aggregation engine
//!
//! Run with: cargo run --example basic -p aggregate

use aggregate::{
    continent_spread, monthly_indicator_series, per_country_series, ContinentCountConfig,
    GapMode, GeographicResolver, Location, LocationTable, PredictionRecord, RecordFilterConfig,
    ReducerKind, RoundingPolicy,
};

fn main() {
    println!("=== aggregate Basic Examples ===\n");

    let records = vec![
        PredictionRecord::new("new_cases", 1, "2025-01-05", Some(120.5)),
        PredictionRecord::new("new_cases", 1, "2025-01-19", Some(80.25)),
        PredictionRecord::new("new_cases", 2, "2025-02-02", Some(40.0)),
        PredictionRecord::new("countries_reporting", 1, "2025-01-03", Some(1.0)),
        PredictionRecord::new("countries_reporting", 2, "2025-01-04", Some(1.0)),
    ];
    let table = LocationTable::new(vec![
        Location::new(1, "France"),
        Location::new(2, "Brazil"),
    ]);
    let policy = RoundingPolicy::default();

    // 1. Monthly sum of one indicator
    println!("1. Monthly new-case sums");
    let series = monthly_indicator_series(
        &records,
        RecordFilterConfig::new().with_indicator("new_cases"),
        ReducerKind::Sum,
        &policy,
        GapMode::ZeroFill,
    )
    .unwrap();
    for (label, value) in series.labels.iter().zip(series.group("new_cases").unwrap()) {
        println!("   {}: {:?}", label, value);
    }
    println!();

    // 2. One sub-series per country
    println!("2. Per-country comparison");
    let series = per_country_series(
        &records,
        &table,
        RecordFilterConfig::new().with_indicator("new_cases"),
        ReducerKind::Sum,
        &policy,
        GapMode::NullGap,
    )
    .unwrap();
    for group in &series.datasets {
        println!("   {}: {:?}", group.label, group.data);
    }
    println!();

    // 3. Continent spread of reporting countries
    println!("3. Reporting countries by continent");
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
    for (label, value) in series
        .labels
        .iter()
        .zip(series.group("countries_reporting").unwrap())
    {
        println!("   {}: {:?}", label, value);
    }

    println!("\n=== Examples Complete ===");
}
