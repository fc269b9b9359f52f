//! # pocket-api
//!
//! HTTP API layer for pocketapi.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Bearer-token auth middleware
//! - Payment order creation through a `PaymentGateway`
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Description |
//! |--------|------|------|-------------|
//! | GET | `/health` | no | Health check |
//! | GET | `/v1/hello` | no | Returns `Hello World` |
//! | POST | `/v1/post` | yes | Returns `Post` |
//! | POST | `/v1/payment/create` | yes | Create payment order |

pub mod auth;
pub mod handlers;
pub mod routes;
pub mod state;

pub use auth::{Claims, TokenAuth};
pub use routes::create_router;
pub use state::{AppConfig, AppState};
