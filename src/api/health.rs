use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub paintings: usize,
    pub artists: usize,
    pub galleries: usize,
}

/// Liveness plus the size of each loaded collection.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        paintings: state.catalog.painting_count(),
        artists: state.catalog.artist_count(),
        galleries: state.catalog.gallery_count(),
    })
}
