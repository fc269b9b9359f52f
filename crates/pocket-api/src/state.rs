//! # Application State
//!
//! Shared state for the Axum application.
//! Built once in `main` and handed to the router; never mutated afterwards.

use crate::auth::TokenAuth;
use anyhow::Context;
use pocket_core::{BoxedPaymentGateway, OrderRequest};
use pocket_razorpay::RazorpayOrderGateway;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// Secret used to verify auth tokens
    pub auth_token_secret: String,
    /// Order template file; the built-in order is used when unset
    pub order_template_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_token_secret =
            lookup("AUTH_TOKEN_SECRET").context("AUTH_TOKEN_SECRET not set")?;
        if auth_token_secret.len() < 16 {
            anyhow::bail!("AUTH_TOKEN_SECRET must be at least 16 characters");
        }

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", raw))?,
            None => 8090,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            json_logs: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
            auth_token_secret,
            order_template_path: lookup("ORDER_TEMPLATE_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("json_logs", &self.json_logs)
            .field("auth_token_secret", &"<redacted>")
            .field("order_template_path", &self.order_template_path)
            .finish()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway used for order creation
    pub gateway: BoxedPaymentGateway,
    /// Auth token verifier
    pub auth: Arc<TokenAuth>,
    /// Order sent on every payment request
    pub order_template: Arc<OrderRequest>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by Razorpay
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let gateway = RazorpayOrderGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;

        let order_template = load_order_template(config.order_template_path.as_deref())?;

        Ok(Self::from_parts(config, Arc::new(gateway), order_template))
    }

    /// Assemble state from already-built parts
    pub fn from_parts(
        config: AppConfig,
        gateway: BoxedPaymentGateway,
        order_template: OrderRequest,
    ) -> Self {
        let auth = TokenAuth::new(&config.auth_token_secret);

        Self {
            gateway,
            auth: Arc::new(auth),
            order_template: Arc::new(order_template),
            config,
        }
    }

    /// Fresh order payload for one request
    pub fn order_request(&self) -> OrderRequest {
        self.order_template.as_ref().clone()
    }
}

/// Load the order template named by `ORDER_TEMPLATE_PATH`.
///
/// Without a path the built-in order is used. With one, the file must be
/// readable and valid or startup fails.
pub fn load_order_template(path: Option<&Path>) -> anyhow::Result<OrderRequest> {
    let Some(path) = path else {
        tracing::info!("No order template configured, using built-in order");
        return Ok(OrderRequest::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order template {}", path.display()))?;
    let order = parse_order_template(&content, path)?;

    tracing::info!(
        "Loaded order template from {}: amount={}, receipt={}",
        path.display(),
        order.display_amount(),
        order.receipt
    );
    Ok(order)
}

fn parse_order_template(content: &str, path: &Path) -> anyhow::Result<OrderRequest> {
    let order = OrderRequest::from_toml(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
    order
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid order template {}: {}", path.display(), e))?;
    Ok(order)
}
