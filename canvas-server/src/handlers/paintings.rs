use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use canvas_core::api::messages;
use tracing::debug;

use super::response::catalog_response;
use crate::infra::app_state::AppState;

/// GET /api/paintings - Every painting in source order
pub async fn list_paintings(State(state): State<AppState>) -> Response {
    Json(state.catalog().paintings()).into_response()
}

/// GET /api/painting/{id} - Single painting by loose id match
pub async fn get_painting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let outcome = state.catalog().painting_by_id(&id);
    debug!(%id, found = outcome.is_found(), "painting lookup");
    catalog_response(outcome, messages::PAINTING_NOT_FOUND)
}

/// GET /api/painting/gallery/{id}
pub async fn paintings_by_gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let outcome = state.catalog().paintings_by_gallery(&id);
    debug!(%id, matches = outcome.len(), "paintings by gallery");
    catalog_response(outcome, messages::NO_PAINTINGS_FOR_GALLERY)
}

/// GET /api/painting/artist/{id}
pub async fn paintings_by_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let outcome = state.catalog().paintings_by_artist(&id);
    debug!(%id, matches = outcome.len(), "paintings by artist");
    catalog_response(outcome, messages::NO_PAINTINGS_FOR_ARTIST)
}

/// GET /api/painting/year/{min}/{max} - Inclusive year range.
///
/// Bounds that are not integers yield the empty-range message.
pub async fn paintings_in_years(
    State(state): State<AppState>,
    Path((min, max)): Path<(String, String)>,
) -> Response {
    let outcome = state.catalog().paintings_in_years(&min, &max);
    debug!(%min, %max, matches = outcome.len(), "paintings in year range");
    catalog_response(outcome, messages::NO_PAINTINGS_IN_YEARS)
}

/// GET /api/painting/title/{text} - Case-insensitive title substring
pub async fn paintings_with_title(
    State(state): State<AppState>,
    Path(text): Path<String>,
) -> Response {
    let outcome = state.catalog().paintings_with_title(&text);
    debug!(%text, matches = outcome.len(), "paintings by title");
    catalog_response(outcome, messages::NO_PAINTINGS_WITH_TITLE)
}

/// GET /api/painting/color/{name} - Any dominant color name containing `name`
pub async fn paintings_with_color(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let outcome = state.catalog().paintings_with_color(&name);
    debug!(%name, matches = outcome.len(), "paintings by color");
    catalog_response(outcome, messages::NO_PAINTINGS_WITH_COLOR)
}
