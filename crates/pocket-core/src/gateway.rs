//! # Payment Gateway Trait
//!
//! Seam between the HTTP layer and the payment provider.
//! Implementations: Razorpay, plus in-process stubs for tests.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        PaymentGateway (trait)            │
//! │  ├── create_order()                      │
//! │  └── provider_name()                     │
//! └──────────────────────────────────────────┘
//!                     ▲
//!          ┌──────────┴──────────┐
//!  ┌───────┴────────┐   ┌────────┴───────┐
//!  │ RazorpayOrder  │   │   test stubs   │
//!  │    Gateway     │   │                │
//!  └────────────────┘   └────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::OrderRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider able to create orders.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order at the provider.
    ///
    /// Returns the provider's response body as-is so callers can relay it
    /// without losing fields.
    async fn create_order(&self, order: &OrderRequest) -> PaymentResult<serde_json::Value>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
