use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::params::PathParams;
use crate::http::response::{non_empty, ApiError};
use crate::http::server::AppState;

pub async fn get_artists(State(state): State<AppState>) -> Response {
    Json(state.catalog.artists()).into_response()
}

pub async fn get_artists_by_country(
    State(state): State<AppState>,
    PathParams(country): PathParams<String>,
) -> Result<Response, ApiError> {
    let country = country.to_lowercase();
    non_empty(state.catalog.artists_by_country(&country), || {
        format!("No artists found within the country: {}", country)
    })
}
