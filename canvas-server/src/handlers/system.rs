use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::debug;

use crate::infra::{app_state::AppState, errors::AppError};

pub const SANITY_MESSAGE: &str = "Canvas catalog API is running";

/// GET / - Plain-text liveness line
pub async fn root_handler() -> &'static str {
    SANITY_MESSAGE
}

/// GET /health - Liveness plus loaded collection sizes
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "catalog": state.catalog().stats(),
    }))
}

pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    debug!(%method, %uri, "no route matched");
    AppError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
