//! Painting handlers.
//!
//! Id parameters that hold no digits cannot match any painting and answer
//! 404; the year range is the one place a non-number is a 400.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::params::{parse_leading_int, PathParams};
use crate::http::response::{non_empty, ApiError};
use crate::http::server::AppState;

pub async fn get_paintings(State(state): State<AppState>) -> Response {
    Json(state.catalog.paintings()).into_response()
}

pub async fn get_painting_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> Result<Response, ApiError> {
    match parse_leading_int(&id).and_then(|id| state.catalog.painting_by_id(id)) {
        Some(painting) => Ok(Json(painting).into_response()),
        None => Err(ApiError::NotFound(format!(
            "Painting with the id: {} is not found",
            id
        ))),
    }
}

pub async fn get_paintings_by_gallery_id(
    State(state): State<AppState>,
    PathParams(raw): PathParams<String>,
) -> Result<Response, ApiError> {
    let Some(gallery_id) = parse_leading_int(&raw) else {
        return Err(ApiError::NotFound(format!(
            "No paintings found for the gallery ID: {}",
            raw
        )));
    };

    non_empty(state.catalog.paintings_by_gallery_id(gallery_id), || {
        format!("No paintings found for the gallery ID: {}", gallery_id)
    })
}

pub async fn get_paintings_by_artist_id(
    State(state): State<AppState>,
    PathParams(raw): PathParams<String>,
) -> Result<Response, ApiError> {
    let Some(artist_id) = parse_leading_int(&raw) else {
        return Err(ApiError::NotFound(format!(
            "No paintings found for the artist ID: {}",
            raw
        )));
    };

    non_empty(state.catalog.paintings_by_artist_id(artist_id), || {
        format!("No paintings found for the artist ID: {}", artist_id)
    })
}

pub async fn get_paintings_by_year_range(
    State(state): State<AppState>,
    PathParams((min, max)): PathParams<(String, String)>,
) -> Result<Response, ApiError> {
    let (Some(min), Some(max)) = (parse_leading_int(&min), parse_leading_int(&max)) else {
        return Err(ApiError::BadRequest("Invalid min/max year format".to_string()));
    };

    non_empty(state.catalog.paintings_by_year_range(min, max), || {
        format!(
            "No paintings found within the given year range of min: {} and max: {}",
            min, max
        )
    })
}

pub async fn get_paintings_by_title(
    State(state): State<AppState>,
    PathParams(text): PathParams<String>,
) -> Result<Response, ApiError> {
    let text = text.to_lowercase();
    non_empty(state.catalog.paintings_by_title(&text), || {
        format!("No paintings found with the provided title text: {}", text)
    })
}

pub async fn get_paintings_by_color_name(
    State(state): State<AppState>,
    PathParams(name): PathParams<String>,
) -> Result<Response, ApiError> {
    let name = name.to_lowercase();
    non_empty(state.catalog.paintings_by_color_name(&name), || {
        format!("No paintings found with the provided color name: {}", name)
    })
}
