use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use canvas_core::api::messages;
use tracing::debug;

use super::response::catalog_response;
use crate::infra::app_state::AppState;

/// GET /api/galleries
pub async fn list_galleries(State(state): State<AppState>) -> Response {
    Json(state.catalog().galleries()).into_response()
}

/// GET /api/galleries/{country} - Exact country, ignoring case
pub async fn galleries_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Response {
    let outcome = state.catalog().galleries_from_country(&country);
    debug!(%country, matches = outcome.len(), "galleries by country");
    catalog_response(outcome, messages::NO_GALLERIES_FOR_COUNTRY)
}
