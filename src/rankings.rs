use std::str::FromStr;

use serde_derive::Serialize;

use crate::constants::COUNTRY_DATA;
use crate::covid::VariableTable;
use crate::error::DashboardError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RankColumn {
    #[default]
    TotalCases,
    TotalDeaths,
    TotalRecovered,
    TotalActive,
}

impl RankColumn {
    pub(crate) const ALL: [RankColumn; 4] = [
        RankColumn::TotalCases,
        RankColumn::TotalDeaths,
        RankColumn::TotalRecovered,
        RankColumn::TotalActive,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn label(self) -> &'static str {
        COUNTRY_DATA.columns[self.index()]
    }

    pub(crate) fn slug(self) -> &'static str {
        match self {
            RankColumn::TotalCases => "cases",
            RankColumn::TotalDeaths => "deaths",
            RankColumn::TotalRecovered => "recovered",
            RankColumn::TotalActive => "active",
        }
    }
}

impl FromStr for RankColumn {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RankColumn::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::InvalidColumn(s.to_string()))
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct RankedCountry {
    pub(crate) rank: usize,
    pub(crate) country: &'static str,
    pub(crate) value: u64,
    pub(crate) share: String,
    pub(crate) stats_url: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct Ranking {
    pub(crate) column: &'static str,
    pub(crate) countries: Vec<RankedCountry>,
}

/// Ranks the table rows by `column`, highest first, then keeps rows whose
/// country contains `search` (case-insensitive). Ranks are assigned before
/// filtering.
pub(crate) fn rank_table(table: &VariableTable, column: RankColumn, search: Option<&str>) -> Ranking {
    let index = column.index();
    let total: u64 = table.rows.iter().map(|r| r.values[index]).sum();

    let mut rows: Vec<_> = table.rows.iter().collect();
    // stable sort keeps table order between ties
    rows.sort_by(|a, b| b.values[index].cmp(&a.values[index]));

    let needle = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());
    let countries = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let value = row.values[index];
            let share = if total == 0 { 0.0 } else { value as f64 * 100.0 / total as f64 };
            RankedCountry {
                rank: i + 1,
                country: row.country,
                value,
                share: format!("{share:.1}%"),
                stats_url: format!("/api/stats/country?country={}", urlencoding::encode(row.country)),
            }
        })
        .filter(|ranked| match &needle {
            Some(needle) => ranked.country.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();

    Ranking { column: column.label(), countries }
}

pub(crate) fn rank_countries(column: RankColumn, search: Option<&str>) -> Ranking {
    rank_table(&COUNTRY_DATA, column, search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::covid::CountryRow;

    #[test]
    fn parses_slugs_and_labels() {
        assert_eq!("deaths".parse::<RankColumn>().unwrap(), RankColumn::TotalDeaths);
        assert_eq!("Total Active".parse::<RankColumn>().unwrap(), RankColumn::TotalActive);
        assert_eq!(" RECOVERED ".parse::<RankColumn>().unwrap(), RankColumn::TotalRecovered);
        assert!(matches!("bogus".parse::<RankColumn>(), Err(DashboardError::InvalidColumn(_))));
    }

    #[test]
    fn ranks_by_cases_descending() {
        let ranking = rank_countries(RankColumn::default(), None);
        assert_eq!(ranking.column, "Total Cases");
        let names: Vec<_> = ranking.countries.iter().map(|c| c.country).collect();
        assert_eq!(names, vec!["USA", "India", "Brazil", "Russia"]);
        let ranks: Vec<_> = ranking.countries.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        // 900 / 3000
        assert_eq!(ranking.countries[0].share, "30.0%");
        assert_eq!(ranking.countries[0].stats_url, "/api/stats/country?country=USA");
    }

    #[test]
    fn ties_keep_table_order() {
        let ranking = rank_countries(RankColumn::TotalDeaths, None);
        let names: Vec<_> = ranking.countries.iter().map(|c| c.country).collect();
        assert_eq!(names, vec!["USA", "India", "Russia", "Brazil"]);
    }

    #[test]
    fn search_filters_after_ranking() {
        let ranking = rank_countries(RankColumn::TotalRecovered, Some("rus"));
        assert_eq!(ranking.countries.len(), 1);
        assert_eq!(ranking.countries[0].country, "Russia");
        assert_eq!(ranking.countries[0].rank, 1);

        let ranking = rank_countries(RankColumn::TotalCases, Some("BRA"));
        assert_eq!(ranking.countries[0].rank, 3);

        assert!(rank_countries(RankColumn::TotalCases, Some("Japan")).countries.is_empty());
        assert_eq!(rank_countries(RankColumn::TotalCases, Some("  ")).countries.len(), 4);
    }

    #[test]
    fn zero_total_has_zero_share() {
        let table = VariableTable {
            columns: ["a", "b", "c", "d"],
            rows: vec![CountryRow { country: "Côte d'Ivoire", values: [0, 0, 0, 0] }],
        };
        let ranking = rank_table(&table, RankColumn::TotalCases, None);
        assert_eq!(ranking.countries[0].share, "0.0%");
        assert_eq!(ranking.countries[0].stats_url, "/api/stats/country?country=C%C3%B4te%20d%27Ivoire");
    }
}
