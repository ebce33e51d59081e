use serde_derive::{Deserialize, Serialize};

/// The four statistics shown for every scope, global or per country.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AggregateCounters {
    pub(crate) total_cases: u64,
    pub(crate) total_deaths: u64,
    pub(crate) total_recovered: u64,
    pub(crate) total_active: u64,
}

impl AggregateCounters {
    /// Counter values in pie-chart category order.
    pub(crate) fn values(&self) -> [u64; 4] {
        [
            self.total_cases,
            self.total_deaths,
            self.total_recovered,
            self.total_active,
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct MapPoint {
    pub(crate) country: &'static str,
    pub(crate) lon: f64,
    pub(crate) lat: f64,
    pub(crate) case_death_ratio: f64,
}

/// One row of the synthetic variable table behind the heatmap and rankings.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CountryRow {
    pub(crate) country: &'static str,
    pub(crate) values: [u64; 4],
}

#[derive(Clone, Debug)]
pub(crate) struct VariableTable {
    pub(crate) columns: [&'static str; 4],
    pub(crate) rows: Vec<CountryRow>,
}

impl VariableTable {
    pub(crate) fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row.values[index] as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_counters_serialize_exactly_four_keys() {
        let counters = AggregateCounters {
            total_cases: 1,
            total_deaths: 2,
            total_recovered: 3,
            total_active: 4,
        };
        let value = serde_json::to_value(counters).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["total_cases", "total_deaths", "total_recovered", "total_active"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(counters.values(), [1, 2, 3, 4]);
    }
}
