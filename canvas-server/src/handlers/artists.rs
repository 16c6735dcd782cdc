use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use canvas_core::api::messages;
use tracing::debug;

use super::response::catalog_response;
use crate::infra::app_state::AppState;

/// GET /api/artists
pub async fn list_artists(State(state): State<AppState>) -> Response {
    Json(state.catalog().artists()).into_response()
}

/// GET /api/artists/{country} - Exact nationality, ignoring case
pub async fn artists_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Response {
    let outcome = state.catalog().artists_from_country(&country);
    debug!(%country, matches = outcome.len(), "artists by country");
    catalog_response(outcome, messages::NO_ARTISTS_FOR_COUNTRY)
}
