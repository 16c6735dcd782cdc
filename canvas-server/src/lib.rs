//! # Canvas Server
//!
//! Read-only HTTP API over a catalog of paintings, artists and galleries.
//!
//! The catalog is loaded once at startup from three JSON documents and
//! shared with every handler through [`AppState`]. Queries that match
//! nothing answer with `200` and a `{"message": ...}` body; unknown routes
//! answer with a `404` JSON error.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::{create_api_router, create_app};
