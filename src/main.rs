use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Json, Router, routing::get};
use serde_derive::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use charts::ChartResponse;
use config::Config;
use error::Result;
use geo::HttpsClient;
use rankings::{RankColumn, Ranking};

mod charts;
mod config;
mod constants;
mod correlation;
mod covid;
mod error;
mod geo;
mod page;
mod plotly;
mod rankings;
mod stats;

#[derive(Clone)]
pub(crate) struct AppState {
    geojson_url: String,
    client: HttpsClient,
}

impl AppState {
    fn new(config: &Config) -> Self {
        AppState {
            geojson_url: config.geojson_url.clone(),
            client: geo::https_client(),
        }
    }
}

#[derive(Deserialize)]
struct CountryQuery {
    country: Option<String>,
}

#[derive(Deserialize)]
struct RankingQuery {
    column: Option<String>,
    search: Option<String>,
}

async fn index() -> Html<String> {
    Html(page::render_index())
}

async fn health() -> &'static str {
    "ok"
}

async fn countries() -> Json<Vec<&'static str>> {
    Json(constants::country_options())
}

async fn global_stats() -> Html<String> {
    Html(stats::render_markdown(&stats::global_stats_markdown()))
}

async fn country_stats(Query(query): Query<CountryQuery>) -> Html<String> {
    Html(stats::render_markdown(&stats::country_stats_markdown(query.country.as_deref())))
}

async fn global_pie() -> Json<ChartResponse> {
    Json(ChartResponse::Figure(charts::global_pie_chart()))
}

async fn country_pie(Query(query): Query<CountryQuery>) -> Json<ChartResponse> {
    Json(charts::country_pie_chart(query.country.as_deref().unwrap_or_default()))
}

async fn trends() -> Json<ChartResponse> {
    let trends = charts::generate_trends(&mut rand::thread_rng());
    Json(ChartResponse::Figure(charts::trend_line_chart(&trends)))
}

async fn heatmap() -> Json<ChartResponse> {
    Json(ChartResponse::Figure(charts::correlation_heatmap(&constants::COUNTRY_DATA)))
}

async fn case_fatality_map() -> Json<ChartResponse> {
    Json(ChartResponse::Figure(charts::case_fatality_map()))
}

async fn world_map() -> Json<ChartResponse> {
    Json(ChartResponse::Figure(charts::interactive_world_map()))
}

async fn static_map(State(app_state): State<AppState>) -> Result<Json<ChartResponse>> {
    let collection = geo::fetch_geojson(&app_state.client, &app_state.geojson_url).await?;
    info!(features = collection.features.len(), "building static map");
    Ok(Json(ChartResponse::Figure(geo::static_world_map(&collection)?)))
}

async fn rankings_endpoint(Query(query): Query<RankingQuery>) -> Result<Json<Ranking>> {
    let column = match query.column.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(column) => column.parse::<RankColumn>()?,
        None => RankColumn::default(),
    };
    Ok(Json(rankings::rank_countries(column, query.search.as_deref())))
}

pub(crate) fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/countries", get(countries))
        .route("/api/stats/global", get(global_stats))
        .route("/api/stats/country", get(country_stats))
        .route("/api/charts/global-pie", get(global_pie))
        .route("/api/charts/country-pie", get(country_pie))
        .route("/api/charts/trends", get(trends))
        .route("/api/charts/heatmap", get(heatmap))
        .route("/api/charts/case-fatality-map", get(case_fatality_map))
        .route("/api/charts/world-map", get(world_map))
        .route("/api/charts/static-map", get(static_map))
        .route("/api/rankings", get(rankings_endpoint))
        .with_state(app_state)
}

async fn run(config: Config) -> Result<()> {
    let app = app(AppState::new(&config));
    let server = axum::Server::try_bind(&config.addr)?.serve(app.into_make_service());
    info!(addr = %server.local_addr(), title = page::TITLE, "dashboard listening");
    server.await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let result = match Config::from_env() {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        error!(error = %e, "dashboard stopped");
        std::process::exit(1);
    }
}
