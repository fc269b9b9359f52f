//! # Routes
//!
//! Axum router configuration for the pocketapi endpoints.

use crate::auth;
use crate::handlers;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /v1/hello - Public greeting
/// - POST /v1/post - Authenticated
/// - POST /v1/payment/create - Authenticated, creates a payment order
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let require_auth = middleware::from_fn_with_state(state.clone(), auth::require_auth);

    let payment_routes = Router::new().route(
        "/create",
        post(handlers::create_payment_order).route_layer(require_auth.clone()),
    );

    let v1_routes = Router::new()
        .route("/hello", get(handlers::hello))
        .route("/post", post(handlers::post).route_layer(require_auth))
        .nest("/payment", payment_routes);

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/v1", v1_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
