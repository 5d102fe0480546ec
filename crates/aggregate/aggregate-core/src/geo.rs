//! Geographic resolver implementation.
//!
//! Resolves location ids to display names, names to continents, and turns
//! per-country reporting into ranked per-continent counts. The continent
//! table is injectable reference data; a built-in default covers the
//! countries of the epidemiological feeds.

use aggregate_api::ContinentCountConfig;
use aggregate_spi::{Continent, ContinentResolver, LocationTable, PredictionRecord, TimedValue};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Static mapping from country display name to continent.
#[derive(Debug, Clone)]
pub struct ContinentMap {
    by_name: BTreeMap<String, Continent>,
}

impl ContinentMap {
    /// Build from explicit (name, continent) pairs.
    pub fn new(entries: impl IntoIterator<Item = (String, Continent)>) -> Self {
        Self {
            by_name: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl ContinentResolver for ContinentMap {
    fn continent_of(&self, location_name: &str) -> Continent {
        self.by_name
            .get(location_name)
            .copied()
            .unwrap_or(Continent::Other)
    }
}

impl Default for ContinentMap {
    /// Built-in reference table for the country names used by the feeds.
    fn default() -> Self {
        let mut by_name = BTreeMap::new();
        let groups: [(Continent, &[&str]); 6] = [
            (
                Continent::Africa,
                &[
                    "Algeria", "Angola", "Cameroon", "Democratic Republic of Congo", "Egypt",
                    "Ethiopia", "Ghana", "Kenya", "Morocco", "Mozambique", "Nigeria", "Senegal",
                    "South Africa", "Sudan", "Tanzania", "Tunisia", "Uganda", "Zambia", "Zimbabwe",
                ],
            ),
            (
                Continent::Asia,
                &[
                    "Afghanistan", "Bangladesh", "Cambodia", "China", "India", "Indonesia", "Iran",
                    "Iraq", "Israel", "Japan", "Jordan", "Kazakhstan", "Malaysia", "Nepal",
                    "Pakistan", "Philippines", "Saudi Arabia", "Singapore", "South Korea",
                    "Sri Lanka", "Thailand", "Turkey", "United Arab Emirates", "Vietnam",
                ],
            ),
            (
                Continent::Europe,
                &[
                    "Albania", "Andorra", "Austria", "Belgium", "Bulgaria", "Croatia",
                    "Czechia", "Denmark", "Finland", "France", "Germany", "Greece", "Hungary",
                    "Iceland", "Ireland", "Italy", "Netherlands", "Norway", "Poland", "Portugal",
                    "Romania", "Russia", "Serbia", "Slovakia", "Slovenia", "Spain", "Sweden",
                    "Switzerland", "Ukraine", "United Kingdom",
                ],
            ),
            (
                Continent::NorthAmerica,
                &[
                    "Canada", "Costa Rica", "Cuba", "Dominican Republic", "Guatemala", "Haiti",
                    "Honduras", "Jamaica", "Mexico", "Panama", "United States",
                ],
            ),
            (
                Continent::SouthAmerica,
                &[
                    "Argentina", "Bolivia", "Brazil", "Chile", "Colombia", "Ecuador", "Paraguay",
                    "Peru", "Uruguay", "Venezuela",
                ],
            ),
            (
                Continent::Oceania,
                &["Australia", "Fiji", "New Zealand", "Papua New Guinea"],
            ),
        ];
        for (continent, names) in groups {
            for name in names {
                by_name.insert((*name).to_string(), continent);
            }
        }
        Self { by_name }
    }
}

/// Geographic resolver: reporting-location extraction and continent tallies.
#[derive(Debug, Clone, Default)]
pub struct GeographicResolver {
    continents: ContinentMap,
}

impl GeographicResolver {
    pub fn new(continents: ContinentMap) -> Self {
        Self { continents }
    }

    /// Continent for a country display name (total, unknown names are
    /// `Other`).
    pub fn continent_of(&self, location_name: &str) -> Continent {
        self.continents.continent_of(location_name)
    }

    /// Distinct location ids whose summed value over `records` exceeds
    /// `threshold`.
    ///
    /// A location reporting 0 and then 5 counts once; a location reporting
    /// only 0 does not count at all (sum must exceed the threshold).
    pub fn unique_reporting_locations(
        &self,
        records: &[PredictionRecord],
        threshold: f64,
    ) -> BTreeSet<i64> {
        let mut sums: BTreeMap<i64, f64> = BTreeMap::new();
        for record in records {
            if record.calendar_date().is_none() {
                continue;
            }
            *sums.entry(record.location_id).or_insert(0.0) += record.value().unwrap_or(0.0);
        }
        sums.into_iter()
            .filter(|(_, sum)| *sum > threshold)
            .map(|(id, _)| id)
            .collect()
    }

    /// Ranked continent counts for a set of location ids.
    ///
    /// Ids absent from `table` are skipped, not counted as `Other`: a missing
    /// reference row is a data-quality gap, not a known-but-uncategorized
    /// country. Output is sorted by descending count, ties broken by the
    /// fixed continent priority, truncated to `config.top_n`.
    pub fn count_by_continent(
        &self,
        location_ids: &BTreeSet<i64>,
        table: &LocationTable,
        config: &ContinentCountConfig,
    ) -> Vec<(Continent, usize)> {
        let mut counts: BTreeMap<Continent, usize> = BTreeMap::new();
        let mut unresolved = 0usize;
        for id in location_ids {
            match table.name_of(*id) {
                Some(name) => {
                    *counts.entry(self.continent_of(name)).or_insert(0) += 1;
                }
                None => unresolved += 1,
            }
        }
        if unresolved > 0 {
            debug!("{} location id(s) missing from the location table", unresolved);
        }

        let mut ranked: Vec<(Continent, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.priority().cmp(&b.0.priority())));
        if let Some(top_n) = config.top_n {
            ranked.truncate(top_n);
        }
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aggregate_spi::Location;

    #[test]
    fn test_default_table_classification() {
        let map = ContinentMap::default();
        assert_eq!(map.continent_of("France"), Continent::Europe);
        assert_eq!(map.continent_of("Brazil"), Continent::SouthAmerica);
        assert_eq!(map.continent_of("Australia"), Continent::Oceania);
    }

    #[test]
    fn test_unmapped_name_is_other_not_error() {
        let map = ContinentMap::default();
        assert_eq!(map.continent_of("Atlantis"), Continent::Other);
    }

    #[test]
    fn test_unique_reporting_locations_threshold() {
        let records = vec![
            PredictionRecord::new("countries_reporting", 1, "2025-01-05", Some(0.0)),
            PredictionRecord::new("countries_reporting", 1, "2025-01-20", Some(5.0)),
            PredictionRecord::new("countries_reporting", 2, "2025-01-10", Some(0.0)),
        ];
        let resolver = GeographicResolver::default();
        let ids = resolver.unique_reporting_locations(&records, 0.0);
        assert_eq!(ids, BTreeSet::from([1]));
    }

    #[test]
    fn test_count_by_continent_basic() {
        let table = LocationTable::new(vec![Location::new(9, "France")]);
        let resolver = GeographicResolver::default();
        let counts = resolver.count_by_continent(
            &BTreeSet::from([9]),
            &table,
            &ContinentCountConfig::default(),
        );
        assert_eq!(counts, vec![(Continent::Europe, 1)]);
    }

    #[test]
    fn test_unresolvable_id_skipped_not_other() {
        let table = LocationTable::new(vec![Location::new(9, "France")]);
        let resolver = GeographicResolver::default();
        let counts = resolver.count_by_continent(
            &BTreeSet::from([9, 404]),
            &table,
            &ContinentCountConfig::default(),
        );
        // Id 404 has no table row: skipped entirely.
        assert_eq!(counts, vec![(Continent::Europe, 1)]);
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert!(total <= 2);
    }

    #[test]
    fn test_tie_break_uses_fixed_priority() {
        let table = LocationTable::new(vec![
            Location::new(1, "France"),
            Location::new(2, "China"),
        ]);
        let resolver = GeographicResolver::default();
        let counts = resolver.count_by_continent(
            &BTreeSet::from([1, 2]),
            &table,
            &ContinentCountConfig::default(),
        );
        // Equal counts: Asia precedes Europe in the fixed priority order.
        assert_eq!(counts, vec![(Continent::Asia, 1), (Continent::Europe, 1)]);
    }

    #[test]
    fn test_larger_count_ranks_first() {
        let table = LocationTable::new(vec![
            Location::new(1, "France"),
            Location::new(2, "Germany"),
            Location::new(3, "China"),
        ]);
        let resolver = GeographicResolver::default();
        let counts = resolver.count_by_continent(
            &BTreeSet::from([1, 2, 3]),
            &table,
            &ContinentCountConfig::default(),
        );
        // Europe has two reporting countries and outranks Asia despite
        // Asia preceding it in the tie-break priority.
        assert_eq!(counts, vec![(Continent::Europe, 2), (Continent::Asia, 1)]);
    }

    #[test]
    fn test_top_n_truncation() {
        let table = LocationTable::new(vec![
            Location::new(1, "France"),
            Location::new(2, "China"),
            Location::new(3, "Brazil"),
        ]);
        let resolver = GeographicResolver::default();
        let counts = resolver.count_by_continent(
            &BTreeSet::from([1, 2, 3]),
            &table,
            &ContinentCountConfig::new().with_top_n(2),
        );
        assert_eq!(counts.len(), 2);
    }
}
