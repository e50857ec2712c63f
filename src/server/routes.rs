//! Gateway route configuration.

use axum::Router;
use axum::routing::{get, post};

use super::GatewayState;
use super::{proxy, static_assets};

/// Create the gateway router: `/api/*` is forwarded, everything else is the
/// embedded web UI.
pub fn create_router(state: GatewayState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(proxy::health))
        .route("/predict", post(proxy::predict));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_assets::serve_frontend)
        .with_state(state)
}
