//! # Request Handlers
//!
//! Axum request handlers for the pocketapi endpoints.

use crate::auth::Claims;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Message returned when the gateway rejects or fails an order
pub const ORDER_FAILED_MESSAGE: &str = "Failed to create payment order";

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pocketapi",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /v1/hello`
pub async fn hello() -> &'static str {
    "Hello World"
}

/// `POST /v1/post` (authenticated)
pub async fn post(Extension(claims): Extension<Claims>) -> &'static str {
    debug!("Post requested by {}", claims.record_id());
    "Post"
}

/// `POST /v1/payment/create` (authenticated)
///
/// The request body is ignored: every call creates the configured order and
/// relays the gateway's response body unchanged.
#[instrument(skip_all, fields(user = %claims.record_id(), provider = state.gateway.provider_name()))]
pub async fn create_payment_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let order = state.order_request();

    info!(
        "Creating payment order: amount={}, receipt={}",
        order.display_amount(),
        order.receipt
    );

    let body = state.gateway.create_order(&order).await.map_err(|e| {
        error!(
            gateway_status = e.status_code(),
            "Failed to create payment order: {}", e
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(ORDER_FAILED_MESSAGE, 500).with_details(e.to_string())),
        )
    })?;

    Ok(Json(body))
}
