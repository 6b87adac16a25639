use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::params::PathParams;
use crate::http::response::{non_empty, ApiError};
use crate::http::server::AppState;

pub async fn get_galleries(State(state): State<AppState>) -> Response {
    Json(state.catalog.galleries()).into_response()
}

pub async fn get_galleries_by_country(
    State(state): State<AppState>,
    PathParams(country): PathParams<String>,
) -> Result<Response, ApiError> {
    let country = country.to_lowercase();
    non_empty(state.catalog.galleries_by_country(&country), || {
        format!("No galleries found within the country: {}", country)
    })
}
