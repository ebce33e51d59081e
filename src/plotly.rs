//! Serde model of the plotly.js figure JSON (`data`, `layout`, `config`)
//! the page hands to `Plotly.newPlot`. Only the attributes the dashboard
//! sets are modelled; unset options are left out of the JSON so plotly.js
//! falls back to its own defaults.

use serde_derive::Serialize;
use serde_json::Value;

#[derive(Serialize, Clone, Debug)]
pub(crate) struct Figure {
    pub(crate) data: Vec<Trace>,
    pub(crate) layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) config: Option<PlotConfig>,
}

impl Figure {
    pub(crate) fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Figure { data, layout, config: None }
    }

    pub(crate) fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
    Heatmap(HeatmapTrace),
    ScatterGeo(PointTrace),
    ScatterMapbox(PointTrace),
    Choropleth(ChoroplethTrace),
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct PieTrace {
    pub(crate) labels: Vec<String>,
    pub(crate) values: Vec<u64>,
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct ScatterTrace {
    pub(crate) x: Vec<String>,
    pub(crate) y: Vec<u64>,
    pub(crate) name: String,
    pub(crate) mode: String,
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct HeatmapTrace {
    pub(crate) x: Vec<String>,
    pub(crate) y: Vec<String>,
    // `None` cells serialize as null and render blank.
    pub(crate) z: Vec<Vec<Option<f64>>>,
    pub(crate) colorscale: String,
    pub(crate) texttemplate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) colorbar: Option<ColorBar>,
}

/// Markers placed by latitude/longitude, on a geo subplot or a tile map.
#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct PointTrace {
    pub(crate) lat: Vec<f64>,
    pub(crate) lon: Vec<f64>,
    pub(crate) text: Vec<String>,
    pub(crate) mode: String,
    pub(crate) marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hovertemplate: Option<String>,
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct ChoroplethTrace {
    pub(crate) geojson: Value,
    pub(crate) featureidkey: String,
    pub(crate) locations: Vec<String>,
    pub(crate) z: Vec<f64>,
    pub(crate) colorscale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) colorbar: Option<ColorBar>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub(crate) enum Scalars {
    One(f64),
    Many(Vec<f64>),
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) size: Option<Scalars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Scalars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sizemode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) colorbar: Option<ColorBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) showscale: Option<bool>,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct LineStyle {
    pub(crate) width: f64,
    pub(crate) color: String,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct ColorBar {
    pub(crate) title: Title,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct Title {
    pub(crate) text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font: Option<Font>,
}

impl Title {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Title { text: text.into(), font: None }
    }
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct Font {
    pub(crate) size: u32,
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mapbox: Option<Mapbox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) paper_bgcolor: Option<String>,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub(crate) struct Margin {
    pub(crate) l: u32,
    pub(crate) r: u32,
    pub(crate) t: u32,
    pub(crate) b: u32,
}

impl Margin {
    pub(crate) fn uniform(size: u32) -> Self {
        Margin { l: size, r: size, t: size, b: size }
    }
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) autorange: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct Legend {
    pub(crate) title: Title,
}

#[derive(Serialize, Clone, Debug, Default)]
pub(crate) struct Geo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) projection: Option<Projection>,
    pub(crate) showcountries: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) countrycolor: Option<String>,
    pub(crate) showcoastlines: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) coastlinecolor: Option<String>,
    pub(crate) showland: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) landcolor: Option<String>,
    pub(crate) showocean: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) oceancolor: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct Projection {
    #[serde(rename = "type")]
    pub(crate) kind: String,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct Mapbox {
    pub(crate) style: String,
    pub(crate) center: LatLon,
    pub(crate) zoom: f64,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub(crate) struct LatLon {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) display_mode_bar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) static_plot: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traces_are_tagged_with_plotly_type_names() {
        let traces = vec![
            Trace::Pie(PieTrace::default()),
            Trace::ScatterGeo(PointTrace::default()),
            Trace::ScatterMapbox(PointTrace::default()),
            Trace::Choropleth(ChoroplethTrace::default()),
        ];
        let value = serde_json::to_value(&traces).unwrap();
        let types: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|trace| trace["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, vec!["pie", "scattergeo", "scattermapbox", "choropleth"]);
    }

    #[test]
    fn unset_layout_options_are_omitted() {
        let layout = Layout { height: Some(350), ..Layout::default() };
        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(value, serde_json::json!({ "height": 350 }));
    }

    #[test]
    fn config_uses_plotly_camel_case() {
        let config = PlotConfig { display_mode_bar: Some(false), ..PlotConfig::default() };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, serde_json::json!({ "displayModeBar": false }));
    }

    #[test]
    fn marker_scalars_serialize_untagged() {
        let marker = Marker {
            size: Some(Scalars::One(15.0)),
            color: Some(Scalars::Many(vec![0.1, 0.2])),
            ..Marker::default()
        };
        let value = serde_json::to_value(&marker).unwrap();
        assert_eq!(value["size"], serde_json::json!(15.0));
        assert_eq!(value["color"], serde_json::json!([0.1, 0.2]));
    }
}
