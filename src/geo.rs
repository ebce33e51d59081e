use std::io::Read;

use axum::http::header::{ACCEPT_ENCODING, CONTENT_ENCODING};
use axum::http::Uri;
use flate2::read::GzDecoder;
use hyper::client::HttpConnector;
use hyper::{body, Body, Client, Method, Request};
use hyper_tls::HttpsConnector;
use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::constants::{GEOJSON_COUNTRY_NAMES, WORLD_MAP_DATA};
use crate::error::{DashboardError, Result};
use crate::plotly::{
    ChoroplethTrace, ColorBar, Figure, Geo, Layout, Margin, PlotConfig, Projection, Title, Trace,
};

pub(crate) type HttpsClient = Client<HttpsConnector<HttpConnector>, Body>;

pub(crate) const GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct FeatureCollection {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) features: Vec<Feature>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct Feature {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<Value>,
    #[serde(default)]
    pub(crate) properties: Map<String, Value>,
    pub(crate) geometry: Value,
}

impl Feature {
    pub(crate) fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }
}

impl FeatureCollection {
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|f| f.name() == Some(name))
    }
}

pub(crate) fn https_client() -> HttpsClient {
    Client::builder().build::<HttpsConnector<HttpConnector>, Body>(HttpsConnector::new())
}

/// Fetches and parses a GeoJSON feature collection. Gzipped bodies are inflated first.
pub(crate) async fn fetch_geojson(client: &HttpsClient, url: &str) -> Result<FeatureCollection> {
    let uri: Uri = url.parse()?;
    info!(%uri, "fetching geojson");

    let request = Request::builder()
        .uri(uri)
        .method(Method::GET)
        .header(ACCEPT_ENCODING, "gzip")
        .body(Body::empty())?;

    let resp = client.request(request).await?;
    if !resp.status().is_success() {
        return Err(DashboardError::Status { status: resp.status(), url: url.to_string() });
    }
    let gzipped = resp
        .headers()
        .get(CONTENT_ENCODING)
        .map(|v| v.as_bytes().eq_ignore_ascii_case(b"gzip"))
        .unwrap_or(false);

    let bytes = body::to_bytes(resp.into_body()).await?;
    debug!(bytes = bytes.len(), gzipped, "geojson body received");

    if gzipped {
        let mut gz = GzDecoder::new(&*bytes);
        let mut decoded_bytes: Vec<u8> = vec![];
        gz.read_to_end(&mut decoded_bytes)?;
        Ok(serde_json::from_slice(&decoded_bytes)?)
    } else {
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Name a data country goes by in the GeoJSON `properties.name` field.
pub(crate) fn geojson_name(country: &str) -> &str {
    GEOJSON_COUNTRY_NAMES.get(country).copied().unwrap_or(country)
}

pub(crate) fn static_world_map(collection: &FeatureCollection) -> Result<Figure> {
    let (locations, z): (Vec<String>, Vec<f64>) = WORLD_MAP_DATA
        .iter()
        .map(|p| (geojson_name(p.country), p.case_death_ratio))
        .filter(|(name, _)| collection.contains(name))
        .map(|(name, ratio)| (name.to_string(), ratio))
        .unzip();

    let trace = ChoroplethTrace {
        geojson: serde_json::to_value(collection)?,
        featureidkey: "properties.name".to_string(),
        locations,
        z,
        colorscale: "YlOrBr".to_string(),
        colorbar: Some(ColorBar { title: Title::text("Case Death Ratio") }),
    };
    let layout = Layout {
        title: Some(Title::text("Static World Map")),
        width: Some(900),
        height: Some(450),
        margin: Some(Margin::uniform(10)),
        geo: Some(Geo {
            projection: Some(Projection { kind: "natural earth".to_string() }),
            showcountries: true,
            countrycolor: Some("LightGrey".to_string()),
            showcoastlines: true,
            ..Geo::default()
        }),
        ..Layout::default()
    };
    Ok(Figure::new(vec![Trace::Choropleth(trace)], layout)
        .with_config(PlotConfig { static_plot: Some(true), ..PlotConfig::default() }))
}
