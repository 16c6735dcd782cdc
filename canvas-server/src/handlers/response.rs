use axum::{
    Json,
    response::{IntoResponse, Response},
};
use canvas_core::QueryOutcome;
use serde::Serialize;
use serde_json::json;

/// Render a query outcome: the matches as JSON, or `{"message": miss}`.
///
/// Both cases answer with 200; a miss is not an HTTP error here.
pub fn catalog_response<T: Serialize>(
    outcome: QueryOutcome<T>,
    miss: &'static str,
) -> Response {
    match outcome {
        QueryOutcome::Found(value) => Json(value).into_response(),
        QueryOutcome::Empty => Json(json!({ "message": miss })).into_response(),
    }
}
