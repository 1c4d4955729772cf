//! Dashboard API routes
//!
//! Thin adapters over the shared [`QueryService`]: every handler is a single
//! read plus formatting.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use world_cup_stats::{
    finalists_message, wins_message, Finalists, MatchResult, QueryService, TournamentStats,
    WorldCupError, YEAR_NOT_FOUND,
};

pub const MAP_TITLE: &str = "FIFA World Cup Winners by Country";
pub const MAP_COLOR_SCALE: &str = "Plasma";
/// Plasma sequential scale, low to high
pub const PLASMA_COLORS: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];
pub const DEFAULT_COUNTRY: &str = "Brazil";
pub const DEFAULT_YEAR: u16 = 2018;

const DASHBOARD_HTML: &str = include_str!("../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: QueryService) -> Self {
        Self {
            service: Arc::new(service),
            started_at: Utc::now(),
        }
    }
}

// ========== Request/Response Types ==========

/// Table row; the map code is left out of the table view
#[derive(Serialize)]
pub struct WinnerRow {
    pub country: String,
    pub wins: u32,
}

#[derive(Serialize)]
pub struct MapPoint {
    pub iso: String,
    pub country: String,
    pub wins: u32,
}

#[derive(Serialize)]
pub struct MapData {
    pub title: &'static str,
    pub color_scale: &'static str,
    pub colors: &'static [&'static str],
    pub points: Vec<MapPoint>,
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub countries: Vec<String>,
    pub years: Vec<u16>,
    pub default_country: &'static str,
    pub default_year: u16,
}

#[derive(Serialize)]
pub struct CountryWinsResponse {
    pub country: String,
    pub wins: u32,
    pub message: String,
}

#[derive(Serialize)]
pub struct FinalistsResponse {
    pub year: i64,
    pub finalists: Option<Finalists>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Lookup(#[from] WorldCupError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Lookup(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ========== Router ==========

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/winners", get(list_winners))
        .route("/map", get(map_data))
        .route("/options", get(options))
        .route("/stats", get(stats))
        .route("/records", get(list_records))
        .route("/countries/:country/wins", get(country_wins))
        .route("/years/:year/finalists", get(year_finalists));

    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .nest("/api/v1", api_routes)
        .with_state(state)
}

// ========== Route Handlers ==========

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "world-cup-gateway",
        "tournaments": state.service.records().len(),
        "started_at": state.started_at.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn list_winners(State(state): State<AppState>) -> Json<Vec<WinnerRow>> {
    let rows = state
        .service
        .win_counts()
        .iter()
        .map(|entry| WinnerRow {
            country: entry.country.clone(),
            wins: entry.wins,
        })
        .collect();

    Json(rows)
}

/// Countries without a map code are not plotted.
pub async fn map_data(State(state): State<AppState>) -> Json<MapData> {
    let points = state
        .service
        .win_counts()
        .iter()
        .filter_map(|entry| {
            Some(MapPoint {
                iso: entry.geo_code.as_ref()?.to_string(),
                country: entry.country.clone(),
                wins: entry.wins,
            })
        })
        .collect();

    Json(MapData {
        title: MAP_TITLE,
        color_scale: MAP_COLOR_SCALE,
        colors: &PLASMA_COLORS,
        points,
    })
}

pub async fn options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        countries: state.service.countries().map(str::to_string).collect(),
        years: state.service.years().collect(),
        default_country: DEFAULT_COUNTRY,
        default_year: DEFAULT_YEAR,
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<TournamentStats> {
    Json(state.service.stats())
}

pub async fn list_records(State(state): State<AppState>) -> Json<Vec<MatchResult>> {
    Json(state.service.records().to_vec())
}

pub async fn country_wins(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<CountryWinsResponse>, ApiError> {
    let wins = state.service.wins_for(&country).map_err(|err| {
        tracing::warn!(%country, "country lookup outside the win table");
        err
    })?;

    Ok(Json(CountryWinsResponse {
        message: wins_message(&country, wins),
        country,
        wins,
    }))
}

/// A missing year is answered with the degraded message and a 404.
pub async fn year_finalists(
    State(state): State<AppState>,
    Path(year): Path<i64>,
) -> (StatusCode, Json<FinalistsResponse>) {
    let (status, finalists, message) = match state.service.finalists_for(year) {
        Ok(finalists) => {
            let message = finalists_message(year, &finalists);
            (StatusCode::OK, Some(finalists), message)
        }
        Err(err) => {
            tracing::debug!(year, error = %err, "year lookup failed");
            (StatusCode::NOT_FOUND, None, YEAR_NOT_FOUND.to_string())
        }
    };

    (
        status,
        Json(FinalistsResponse {
            year,
            finalists,
            message,
        }),
    )
}
