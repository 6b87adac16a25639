//! REST routes of the catalog.
//!
//! ```text
//! GET /api/paintings
//! GET /api/painting/{id}
//! GET /api/painting/gallery/{id}
//! GET /api/painting/artist/{id}
//! GET /api/painting/year/{min}/{max}
//! GET /api/painting/title/{text}
//! GET /api/painting/color/{name}
//! GET /api/artists
//! GET /api/artists/{country}
//! GET /api/galleries
//! GET /api/galleries/{country}
//! GET /health
//! ```

pub mod artists;
pub mod galleries;
pub mod health;
pub mod paintings;

use axum::{routing::get, Router};

use crate::http::server::AppState;

pub fn setup_api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/paintings", get(paintings::get_paintings))
        .route("/api/painting/{id}", get(paintings::get_painting_by_id))
        .route("/api/painting/gallery/{id}", get(paintings::get_paintings_by_gallery_id))
        .route("/api/painting/artist/{id}", get(paintings::get_paintings_by_artist_id))
        .route("/api/painting/year/{min}/{max}", get(paintings::get_paintings_by_year_range))
        .route("/api/painting/title/{text}", get(paintings::get_paintings_by_title))
        .route("/api/painting/color/{name}", get(paintings::get_paintings_by_color_name))
        .route("/api/artists", get(artists::get_artists))
        .route("/api/artists/{country}", get(artists::get_artists_by_country))
        .route("/api/galleries", get(galleries::get_galleries))
        .route("/api/galleries/{country}", get(galleries::get_galleries_by_country))
        .route("/health", get(health::get_health))
        .with_state(state)
}
