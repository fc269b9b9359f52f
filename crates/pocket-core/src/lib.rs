//! # pocket-core
//!
//! Core types and traits for the pocketapi payment service.
//!
//! This crate provides:
//! - `PaymentGateway` trait for payment providers
//! - `OrderRequest` and `Currency` for the order payload
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pocket_core::{OrderRequest, PaymentGateway};
//!
//! let order = OrderRequest::default();
//! let body = gateway.create_order(&order).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod order;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use order::{Currency, OrderRequest};
