use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures the HTTP layer reports as an error body.
///
/// Catalog queries never fail: a query that matches nothing is answered with
/// a `{"message"}` body and status 200, not through this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No route for {method} {path}")]
    RouteNotFound { method: Method, path: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "status": status.as_u16(),
            }
        }));

        (status, body).into_response()
    }
}
