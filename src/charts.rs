use chrono::{Months, NaiveDate};
use rand::Rng;
use serde_derive::Serialize;

use crate::constants::{self, CATEGORY_LABELS, GLOBAL_DATA, WORLD_MAP_DATA};
use crate::correlation::correlation_matrix;
use crate::covid::{AggregateCounters, VariableTable};
use crate::plotly::{
    Axis, ColorBar, Figure, Font, Geo, HeatmapTrace, Layout, LatLon, Legend, LineStyle, Mapbox,
    Margin, Marker, PieTrace, PlotConfig, PointTrace, Projection, Scalars, ScatterTrace, Title,
    Trace,
};
use crate::stats::INVALID_COUNTRY_PROMPT;

pub(crate) const TREND_PERIODS: usize = 50;

/// What a chart endpoint hands the page: a figure to plot, or a message to show in its place.
#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ChartResponse {
    Figure(Figure),
    Message(String),
}

fn pie_chart(title: String, counters: &AggregateCounters) -> Figure {
    let trace = PieTrace {
        labels: CATEGORY_LABELS.iter().map(|l| l.to_string()).collect(),
        values: counters.values().to_vec(),
    };
    let layout = Layout {
        title: Some(Title { text: title, font: Some(Font { size: 12 }) }),
        width: Some(310),
        height: Some(310),
        ..Layout::default()
    };
    Figure::new(vec![Trace::Pie(trace)], layout)
}

pub(crate) fn global_pie_chart() -> Figure {
    pie_chart("Global COVID-19 Statistics".to_string(), &GLOBAL_DATA)
}

pub(crate) fn country_pie_chart(country: &str) -> ChartResponse {
    let country = country.trim();
    match constants::country_counters(country) {
        Some(counters) => {
            ChartResponse::Figure(pie_chart(format!("{country} COVID-19 Statistics"), counters))
        }
        None => ChartResponse::Message(INVALID_COUNTRY_PROMPT.to_string()),
    }
}

#[derive(Clone, Debug)]
pub(crate) struct TrendSeries {
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) cases: Vec<u64>,
    pub(crate) deaths: Vec<u64>,
    pub(crate) recovered: Vec<u64>,
}

/// Last day of each month, starting with January 2020.
pub(crate) fn month_ends(periods: usize) -> Vec<NaiveDate> {
    let Some(february) = NaiveDate::from_ymd_opt(2020, 2, 1) else {
        return Vec::new();
    };
    (0..periods as u32)
        .filter_map(|i| february.checked_add_months(Months::new(i)))
        .filter_map(|first| first.pred_opt())
        .collect()
}

pub(crate) fn generate_trends<R: Rng + ?Sized>(rng: &mut R) -> TrendSeries {
    let dates = month_ends(TREND_PERIODS);
    let n = dates.len();
    TrendSeries {
        cases: (0..n).map(|_| rng.gen_range(100_000..1_000_000)).collect(),
        deaths: (0..n).map(|_| rng.gen_range(1_000..10_000)).collect(),
        recovered: (0..n).map(|_| rng.gen_range(50_000..100_000)).collect(),
        dates,
    }
}

pub(crate) fn trend_line_chart(trends: &TrendSeries) -> Figure {
    let x: Vec<String> = trends.dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    let data = [("Cases", &trends.cases), ("Deaths", &trends.deaths), ("Recovered", &trends.recovered)]
        .into_iter()
        .map(|(name, y)| {
            Trace::Scatter(ScatterTrace {
                x: x.clone(),
                y: y.clone(),
                name: name.to_string(),
                mode: "lines".to_string(),
            })
        })
        .collect();
    let layout = Layout {
        title: Some(Title::text("COVID-19 Trends Over Time")),
        height: Some(350),
        xaxis: Some(Axis { title: Some(Title::text("Date")), autorange: None }),
        yaxis: Some(Axis { title: Some(Title::text("Count")), autorange: None }),
        legend: Some(Legend { title: Title::text("Metric") }),
        ..Layout::default()
    };
    Figure::new(data, layout)
}

pub(crate) fn correlation_heatmap(table: &VariableTable) -> Figure {
    let matrix = correlation_matrix(table);
    let trace = HeatmapTrace {
        x: matrix.labels.clone(),
        y: matrix.labels,
        z: matrix.values,
        colorscale: "Viridis".to_string(),
        texttemplate: "%{z:.2f}".to_string(),
        colorbar: Some(ColorBar { title: Title::text("Correlation") }),
    };
    let layout = Layout {
        title: Some(Title::text("Interactive Correlation Heatmap: COVID-19 Statistics")),
        width: Some(500),
        height: Some(310),
        margin: Some(Margin::uniform(40)),
        // image orientation: first row on top
        yaxis: Some(Axis { title: None, autorange: Some("reversed".to_string()) }),
        ..Layout::default()
    };
    Figure::new(vec![Trace::Heatmap(trace)], layout)
        .with_config(PlotConfig { display_mode_bar: Some(false), ..PlotConfig::default() })
}

fn ratios() -> Vec<f64> {
    WORLD_MAP_DATA.iter().map(|p| p.case_death_ratio).collect()
}

fn point_trace(mode: &str, marker: Marker) -> PointTrace {
    PointTrace {
        lat: WORLD_MAP_DATA.iter().map(|p| p.lat).collect(),
        lon: WORLD_MAP_DATA.iter().map(|p| p.lon).collect(),
        text: WORLD_MAP_DATA.iter().map(|p| p.country.to_string()).collect(),
        mode: mode.to_string(),
        marker,
        hovertemplate: Some("%{text}<br>Case Fatality Ratio: %{marker.color}<extra></extra>".to_string()),
    }
}

pub(crate) fn case_fatality_map() -> Figure {
    let marker = Marker {
        size: Some(Scalars::Many(ratios())),
        color: Some(Scalars::Many(ratios())),
        colorscale: Some("Reds".to_string()),
        sizemode: Some("area".to_string()),
        sizeref: Some(0.01),
        line: Some(LineStyle { width: 0.5, color: "black".to_string() }),
        colorbar: Some(ColorBar { title: Title::text("Case Fatality Ratio") }),
        showscale: Some(true),
    };
    let geo = Geo {
        projection: Some(Projection { kind: "natural earth".to_string() }),
        showcountries: true,
        countrycolor: Some("LightGrey".to_string()),
        showcoastlines: true,
        coastlinecolor: Some("LightBlue".to_string()),
        showland: true,
        landcolor: Some("LightGreen".to_string()),
        showocean: true,
        oceancolor: Some("LightBlue".to_string()),
    };
    let layout = Layout {
        title: Some(Title::text("World Map: Case Fatality Ratios")),
        width: Some(800),
        height: Some(500),
        geo: Some(geo),
        paper_bgcolor: Some("white".to_string()),
        ..Layout::default()
    };
    Figure::new(vec![Trace::ScatterGeo(point_trace("markers+text", marker))], layout)
}

pub(crate) fn interactive_world_map() -> Figure {
    let marker = Marker {
        size: Some(Scalars::One(15.0)),
        color: Some(Scalars::Many(ratios())),
        colorscale: Some("YlOrBr".to_string()),
        colorbar: Some(ColorBar { title: Title::text("Case Death Ratio") }),
        showscale: Some(true),
        ..Marker::default()
    };
    let layout = Layout {
        width: Some(800),
        height: Some(500),
        margin: Some(Margin::uniform(0)),
        mapbox: Some(Mapbox {
            style: "carto-darkmatter".to_string(),
            center: LatLon { lat: 20.0, lon: 0.0 },
            zoom: 0.8,
        }),
        ..Layout::default()
    };
    Figure::new(vec![Trace::ScatterMapbox(point_trace("markers", marker))], layout)
}
