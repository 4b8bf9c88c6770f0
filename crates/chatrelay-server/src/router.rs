use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::middleware;
use crate::routes;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/s3-test", get(routes::s3_test::s3_test))
        .route("/chat", post(routes::chat::chat))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors())
        .with_state(state)
}

/// Allow every origin, method and header, with credentials.
///
/// A wildcard origin can't be combined with credentials, so each list mirrors
/// what the request asks for.
// TODO: restrict origins once the deployment is known to sit behind a
// trusted front-end; this mirrors anything, and no route is authenticated.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
