//! Router construction for the solar system server.

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState, config: &Config) -> Router {
    tracing::debug!("Serving static files from: {}", config.static_dir.display());

    // Static assets skip the browser cache while developing
    let no_cache = SetResponseHeaderLayer::overriding(
        CACHE_CONTROL,
        debug_cache_control(config.debug),
    );
    let assets = ServiceBuilder::new()
        .layer(no_cache)
        .service(ServeDir::new(&config.static_dir));

    // The front-end may be hosted on another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::static_files::serve_index))
        .route(
            "/api/planet-info/:identifier",
            get(routes::api::planet_info),
        )
        .route("/api/sun-info", get(routes::api::sun_info))
        .route("/api/health", get(routes::api::health_check))
        .nest_service("/static", assets)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// `None` leaves the header untouched outside debug mode.
fn debug_cache_control(debug: bool) -> Option<HeaderValue> {
    debug.then(|| HeaderValue::from_static("no-cache, no-store, must-revalidate"))
}
