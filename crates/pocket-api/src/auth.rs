//! # Authentication
//!
//! Bearer-token verification for protected routes.
//!
//! Tokens are HS256 JWTs signed with `AUTH_TOKEN_SECRET`. Whoever issues
//! tokens (an identity service, an admin script, the tests) shares that
//! secret; this service only checks them.

use crate::handlers::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Message returned on every auth failure
pub const UNAUTHORIZED_MESSAGE: &str = "The request requires valid record authorization token.";

const DEFAULT_COLLECTION: &str = "users";

/// Clock skew tolerated when checking `exp`, in seconds
const LEEWAY_SECS: u64 = 5;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authorization token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token generation failed: {0}")]
    Encoding(String),
}

/// Claims carried by an auth token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated record id
    pub sub: String,
    /// Auth collection the record belongs to
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Issued at (unix seconds); zero when the issuer left it out
    #[serde(default)]
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Claims {
    pub fn record_id(&self) -> &str {
        &self.sub
    }
}

/// Issues and verifies auth tokens
pub struct TokenAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenAuth {
    /// Create from a shared secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token for a record in the default collection.
    ///
    /// A negative lifetime yields an already-expired token.
    pub fn issue_with_ttl(
        &self,
        subject: impl Into<String>,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Encoding(format!("token lifetime out of range: {}", ttl)))?;
        let claims = Claims {
            sub: subject.into(),
            collection: default_collection(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Validate the token found in request headers
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let token = extract_token(headers).ok_or(AuthError::MissingToken)?;
        self.validate(token)
    }
}

/// Pull the token out of `Authorization`, with or without a `Bearer ` prefix.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Middleware rejecting requests without a valid auth token
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    match state.auth.authenticate(request.headers()) {
        Ok(claims) => {
            debug!("Authenticated record {}", claims.record_id());
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            debug!("Rejected request to {}: {}", request.uri().path(), e);
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(UNAUTHORIZED_MESSAGE, 401)),
            ))
        }
    }
}
