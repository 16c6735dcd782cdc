use axum::{Router, http::HeaderValue, routing::get};
use canvas_core::api::routes;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{artists, galleries, paintings, system},
    infra::{app_state::AppState, config::CorsConfig},
};

/// Catalog query routes under `/api`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(routes::paintings::COLLECTION, get(paintings::list_paintings))
        .route(routes::paintings::ITEM, get(paintings::get_painting))
        .route(
            routes::paintings::BY_GALLERY,
            get(paintings::paintings_by_gallery),
        )
        .route(
            routes::paintings::BY_ARTIST,
            get(paintings::paintings_by_artist),
        )
        .route(routes::paintings::BY_YEARS, get(paintings::paintings_in_years))
        .route(
            routes::paintings::BY_TITLE,
            get(paintings::paintings_with_title),
        )
        .route(
            routes::paintings::BY_COLOR,
            get(paintings::paintings_with_color),
        )
        .route(routes::artists::COLLECTION, get(artists::list_artists))
        .route(routes::artists::BY_COUNTRY, get(artists::artists_by_country))
        .route(routes::galleries::COLLECTION, get(galleries::list_galleries))
        .route(
            routes::galleries::BY_COUNTRY,
            get(galleries::galleries_by_country),
        )
}

/// Full application: system routes, the catalog API, CORS and request
/// tracing.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = cors_layer(&state.config().cors);

    Router::new()
        .route(routes::ROOT, get(system::root_handler))
        .route(routes::HEALTH, get(system::health_handler))
        .merge(create_api_router())
        .fallback(system::route_not_found)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.is_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
