//! # pocket-razorpay
//!
//! Razorpay payment gateway for pocketapi.
//!
//! Implements `PaymentGateway` on top of the Razorpay Orders API. Requests are
//! authenticated with HTTP Basic auth using the key id and key secret.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pocket_razorpay::RazorpayOrderGateway;
//! use pocket_core::{OrderRequest, PaymentGateway};
//!
//! // Create gateway from environment
//! let gateway = RazorpayOrderGateway::from_env()?;
//!
//! // Create an order; the Razorpay response body comes back untouched
//! let order = gateway.create_order(&OrderRequest::default()).await?;
//! ```

pub mod config;
pub mod orders;

// Re-exports
pub use config::RazorpayConfig;
pub use orders::RazorpayOrderGateway;
