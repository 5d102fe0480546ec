//! One-call pipelines over the four stages.
//!
//! Each function mirrors one dashboard view and composes
//! filter -> group -> (resolve) -> assemble with the rounding rule the
//! configured policy assigns to the indicator. All of them are pure: fresh
//! output per call, inputs untouched.

use aggregate_facade::{
    archive_metric_values, AggregatedSeries, ArchiveRecord, ContinentCountConfig, GapMode,
    GeographicResolver, LocationTable, MonthlyGrouper, PeriodKey, PredictionRecord,
    RecordFilter, RecordFilterConfig, ReducerKind, Result, RoundingMode, RoundingPolicy,
    SeriesAssembler,
};
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Indicator name used by the geographic spread views.
pub const COUNTRIES_REPORTING: &str = "countries_reporting";

/// Monthly series for one indicator (transmission and mortality views).
///
/// The single dataset is labeled with the indicator name. No matching
/// records yields the empty series, not an error.
pub fn monthly_indicator_series(
    records: &[PredictionRecord],
    config: RecordFilterConfig,
    reducer: ReducerKind,
    policy: &RoundingPolicy,
    gap_mode: GapMode,
) -> Result<AggregatedSeries> {
    let label = config.indicator.clone().unwrap_or_else(|| "value".to_string());
    let filter = RecordFilter::new(config);
    filter.validate()?;

    let filtered = filter.apply(records);
    let buckets = MonthlyGrouper::new(reducer).group(&filtered);
    let assembler = SeriesAssembler::new(gap_mode, policy.mode_for(&label));
    Ok(assembler.assemble_single(&label, &buckets))
}

/// Monthly count of reporting countries (geographic spread view).
///
/// Sums the `countries_reporting` indicator per month and rounds to whole
/// countries.
pub fn geographic_spread_series(
    records: &[PredictionRecord],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    policy: &RoundingPolicy,
) -> Result<AggregatedSeries> {
    let mut config = RecordFilterConfig::new().with_indicator(COUNTRIES_REPORTING);
    config.start_date = start;
    config.end_date = end;
    monthly_indicator_series(records, config, ReducerKind::Sum, policy, GapMode::ZeroFill)
}

/// One monthly sub-series per country (multi-country comparison view).
///
/// Group labels are display names resolved through the location table;
/// records whose id has no table row are skipped, consistent with the
/// unknown-location policy for continent counts.
pub fn per_country_series(
    records: &[PredictionRecord],
    table: &LocationTable,
    config: RecordFilterConfig,
    reducer: ReducerKind,
    policy: &RoundingPolicy,
    gap_mode: GapMode,
) -> Result<AggregatedSeries> {
    let indicator = config.indicator.clone().unwrap_or_else(|| "value".to_string());
    let filter = RecordFilter::new(config);
    filter.validate()?;

    let filtered = filter.apply(records);
    let mut skipped = 0usize;
    let per_group = MonthlyGrouper::new(reducer).group_by_key(&filtered, |record| {
        match table.name_of(record.location_id) {
            Some(name) => Some(name.to_string()),
            None => {
                skipped += 1;
                None
            }
        }
    });
    if skipped > 0 {
        debug!("skipped {} record(s) with location ids missing from the table", skipped);
    }

    let assembler = SeriesAssembler::new(gap_mode, policy.mode_for(&indicator));
    Ok(assembler.assemble(&per_group))
}

/// One monthly sub-series per prediction model (model comparison view).
///
/// Records without a `model_name` are skipped.
pub fn per_model_series(
    records: &[PredictionRecord],
    config: RecordFilterConfig,
    reducer: ReducerKind,
    policy: &RoundingPolicy,
    gap_mode: GapMode,
) -> Result<AggregatedSeries> {
    let indicator = config.indicator.clone().unwrap_or_else(|| "value".to_string());
    let filter = RecordFilter::new(config);
    filter.validate()?;

    let filtered = filter.apply(records);
    let per_group =
        MonthlyGrouper::new(reducer).group_by_key(&filtered, |record| record.model_name.clone());

    let assembler = SeriesAssembler::new(gap_mode, policy.mode_for(&indicator));
    Ok(assembler.assemble(&per_group))
}

/// Ranked continent bar series for the reporting countries in a window.
///
/// Filters the `countries_reporting` indicator to the window, keeps the
/// locations whose summed value exceeds the configured threshold, resolves
/// them to continents, and emits one bar per continent in rank order.
pub fn continent_spread(
    records: &[PredictionRecord],
    table: &LocationTable,
    resolver: &GeographicResolver,
    count_config: &ContinentCountConfig,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<AggregatedSeries> {
    let mut config = RecordFilterConfig::new().with_indicator(COUNTRIES_REPORTING);
    config.start_date = start;
    config.end_date = end;
    let filter = RecordFilter::new(config);
    filter.validate()?;

    let filtered = filter.apply(records);
    let ids = resolver.unique_reporting_locations(&filtered, count_config.threshold);
    let counts = resolver.count_by_continent(&ids, table, count_config);
    Ok(SeriesAssembler::assemble_continents(COUNTRIES_REPORTING, &counts))
}

/// Monthly series for archive metrics of a single location.
///
/// One sub-series per requested metric, each rounded by the policy's rule
/// for that metric name. Rounding happens per bucket so metrics with
/// different rules can share one series.
pub fn archive_metric_series(
    records: &[ArchiveRecord],
    metrics: &[&str],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    reducer: ReducerKind,
    policy: &RoundingPolicy,
    gap_mode: GapMode,
) -> AggregatedSeries {
    let grouper = MonthlyGrouper::new(reducer);
    let mut per_group: BTreeMap<String, BTreeMap<PeriodKey, f64>> = BTreeMap::new();
    for metric in metrics {
        let observations = archive_metric_values(records, metric, start, end);
        if observations.is_empty() {
            continue;
        }
        let buckets = round_buckets(grouper.group(&observations), policy.mode_for(metric));
        per_group.insert((*metric).to_string(), buckets);
    }

    let assembler = SeriesAssembler::new(gap_mode, RoundingMode::None);
    assembler.assemble(&per_group)
}

fn round_buckets(
    buckets: BTreeMap<PeriodKey, f64>,
    mode: RoundingMode,
) -> BTreeMap<PeriodKey, f64> {
    buckets
        .into_iter()
        .map(|(key, value)| (key, mode.apply(value)))
        .collect()
}
