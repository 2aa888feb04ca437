//! JSON API Routes
//!
//! Read-only views of the finals table:
//! - GET countries / years (selector options)
//! - GET wins, wins by country
//! - GET finals, final by year
//! - GET choropleth figure

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use world_cup::{
    describe_country_wins, describe_final, parse_year, ChoroplethFigure, LookupError,
    MatchRecord, WinCountEntry,
};

use crate::AppState;

// ========== Response Types ==========

#[derive(Serialize)]
pub struct CountryWinsResponse {
    pub country: String,
    pub wins: u32,
    pub message: String,
}

#[derive(Serialize)]
pub struct FinalResponse {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub message: String,
}

// ========== Route Handlers ==========

pub async fn list_countries(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .dataset
            .country_options()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

pub async fn list_years(State(state): State<AppState>) -> Json<Vec<u16>> {
    Json(state.dataset.year_options())
}

pub async fn list_wins(State(state): State<AppState>) -> Json<Vec<WinCountEntry>> {
    Json(state.dataset.win_counts().to_vec())
}

pub async fn get_country_wins(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<CountryWinsResponse>, (StatusCode, String)> {
    let dataset = &state.dataset;

    let entry = dataset.wins_for(&country).map_err(lookup_failure)?;
    let message =
        describe_country_wins(dataset, Some(country.as_str())).map_err(lookup_failure)?;

    Ok(Json(CountryWinsResponse {
        country: entry.country.clone(),
        wins: entry.wins,
        message,
    }))
}

pub async fn list_finals(State(state): State<AppState>) -> Json<Vec<MatchRecord>> {
    Json(state.dataset.finals().to_vec())
}

pub async fn get_final(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<FinalResponse>, (StatusCode, String)> {
    let dataset = &state.dataset;

    let year = parse_year(Some(year.as_str()))
        .map_err(lookup_failure)?
        .ok_or((StatusCode::BAD_REQUEST, "Year is required".to_string()))?;

    let record = dataset.final_for(year).map_err(lookup_failure)?;
    let message = describe_final(dataset, Some(year)).map_err(lookup_failure)?;

    Ok(Json(FinalResponse {
        year: record.year,
        winner: record.winner.clone(),
        runner_up: record.runner_up.clone(),
        message,
    }))
}

pub async fn get_choropleth(State(state): State<AppState>) -> Json<ChoroplethFigure> {
    Json(state.dataset.choropleth())
}

fn lookup_failure(err: LookupError) -> (StatusCode, String) {
    tracing::debug!("Lookup miss: {}", err);
    let status = match err {
        LookupError::UnknownCountry(_) | LookupError::UnknownYear(_) => StatusCode::NOT_FOUND,
        LookupError::InvalidYear(_) => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}

// ========== Router ==========

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/years", get(list_years))
        .route("/wins", get(list_wins))
        .route("/wins/:country", get(get_country_wins))
        .route("/finals", get(list_finals))
        .route("/finals/:year", get(get_final))
        .route("/choropleth", get(get_choropleth))
}
