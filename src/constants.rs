use std::collections::HashMap;
use once_cell::sync::Lazy;

use crate::covid::{AggregateCounters, CountryRow, MapPoint, VariableTable};

pub(crate) const CATEGORY_LABELS: [&str; 4] =
    ["Total Cases", "Total Deaths", "Total Recovered", "Total Active"];

pub(crate) const GLOBAL_DATA: AggregateCounters = AggregateCounters {
    total_cases: 500,
    total_deaths: 100,
    total_recovered: 200,
    total_active: 200,
};

// Order is the country selector's option order.
pub(crate) const COUNTRY_TOTAL_CASE_DATA: [(&str, AggregateCounters); 3] = [
    ("US", AggregateCounters { total_cases: 900, total_deaths: 100, total_recovered: 200, total_active: 200 }),
    ("India", AggregateCounters { total_cases: 800, total_deaths: 100, total_recovered: 200, total_active: 200 }),
    ("Italy", AggregateCounters { total_cases: 700, total_deaths: 100, total_recovered: 200, total_active: 200 }),
];

/// Names offered as suggestions by the ranking search field.
pub(crate) const COUNTRIES: [&str; 6] = ["USA", "India", "Brazil", "Russia", "France", "Japan"];

pub(crate) static WORLD_MAP_DATA: Lazy<Vec<MapPoint>> = Lazy::new(|| vec![
    MapPoint { country: "USA", lon: -95.7129, lat: 37.0902, case_death_ratio: 0.05 },
    MapPoint { country: "India", lon: 78.9629, lat: 20.5937, case_death_ratio: 0.03 },
    MapPoint { country: "Brazil", lon: -51.9253, lat: -14.2350, case_death_ratio: 0.06 },
    MapPoint { country: "Russia", lon: 105.3188, lat: 61.5240, case_death_ratio: 0.02 },
    MapPoint { country: "France", lon: 2.2137, lat: 46.6034, case_death_ratio: 0.04 },
    MapPoint { country: "Australia", lon: 133.7751, lat: -25.2744, case_death_ratio: 0.01 },
]);

pub(crate) static COUNTRY_DATA: Lazy<VariableTable> = Lazy::new(|| VariableTable {
    columns: CATEGORY_LABELS,
    rows: vec![
        CountryRow { country: "USA", values: [900, 100, 200, 200] },
        CountryRow { country: "India", values: [800, 100, 200, 200] },
        CountryRow { country: "Brazil", values: [700, 80, 190, 200] },
        CountryRow { country: "Russia", values: [600, 90, 210, 190] },
    ],
});

/// Data country names that differ from the `properties.name` used by the world GeoJSON.
pub(crate) static GEOJSON_COUNTRY_NAMES: Lazy<HashMap<&str, &str>> = Lazy::new(||
    HashMap::from([
        ("USA", "United States of America"),
        ("US", "United States of America"),
    ])
);

pub(crate) fn country_counters(country: &str) -> Option<&'static AggregateCounters> {
    let country = country.trim();
    COUNTRY_TOTAL_CASE_DATA
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, counters)| counters)
}

pub(crate) fn country_options() -> Vec<&'static str> {
    COUNTRY_TOTAL_CASE_DATA.iter().map(|(name, _)| *name).collect()
}
