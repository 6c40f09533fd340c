//! REST API endpoints for Sun and planet facts
//!
//! GET /api/planet-info/:identifier — planet record, or `{}` when unmatched
//! GET /api/sun-info                — the Sun record
//! GET /api/health                  — liveness probe

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::bodies::{PlanetInfo, Sun};
use crate::state::AppState;

// =============================================================================
// LOOKUPS
// =============================================================================

/// Unknown identifiers are answered with `200 OK` and an empty object.
///
/// A segment that does not decode to UTF-8 cannot name a planet, so it is
/// unknown too rather than a `400`.
pub async fn planet_info(
    State(state): State<AppState>,
    identifier: Result<Path<String>, PathRejection>,
) -> Json<PlanetInfo> {
    match identifier {
        Ok(Path(identifier)) => Json(state.catalog.planet(&identifier)),
        Err(rejection) => {
            tracing::debug!("Undecodable planet identifier: {}", rejection.body_text());
            Json(PlanetInfo::Empty)
        }
    }
}

pub async fn sun_info(State(state): State<AppState>) -> Json<&'static Sun> {
    Json(state.catalog.sun())
}

// =============================================================================
// HEALTH
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub planets: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        planets: state.catalog.len(),
    })
}
