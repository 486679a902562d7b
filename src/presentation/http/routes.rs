use super::{
    handlers::{catalog, fallback, health, search, skins},
    middleware::{panic::handle_panic, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub fn create_router(state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/api/{language}/all.json", get(catalog::get_all))
        .route("/api/{language}/skins.json", get(skins::get_skins))
        .route(
            "/api/{language}/skins_not_grouped.json",
            get(skins::get_skins_not_grouped),
        )
        .route("/api/{language}/stickers.json", get(catalog::get_stickers))
        .route(
            "/api/{language}/collections.json",
            get(catalog::get_collections),
        )
        .route("/api/{language}/crates.json", get(catalog::get_crates))
        .route("/api/{language}/search", get(search::search_catalog));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Catalog
        .merge(catalog_routes)
        .fallback(fallback::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// The router with the response layers every deployment carries: CORS for
/// any origin, gzip compression and `nosniff`.
pub fn create_app(state: AppState) -> Router {
    // Public read-only API: any origin may read it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    create_router(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}
