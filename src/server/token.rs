//! Session token issuing and verification.
//!
//! Tokens are HS256 JWTs valid for 24 hours.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Payload stored in a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// User id (anonymous id or email)
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_anonymous: bool,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs: TOKEN_TTL_SECS,
        }
    }

    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    pub fn issue_anonymous(&self, anonymous_id: &str) -> Result<String, AuthError> {
        self.issue(anonymous_id, None, true)
    }

    pub fn issue_for_email(&self, email: &str) -> Result<String, AuthError> {
        self.issue(email, Some(email), false)
    }

    fn issue(&self, sub: &str, email: Option<&str>, is_anonymous: bool) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            email: email.map(String::from),
            is_anonymous,
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenRejected {
            message: format!("Failed to sign token: {}", e),
        })
    }

    /// Verify signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|err| {
            use jsonwebtoken::errors::ErrorKind;
            let message = match err.kind() {
                ErrorKind::ExpiredSignature => "Token expired",
                ErrorKind::InvalidSignature => "Invalid signature",
                ErrorKind::InvalidToken => "Invalid token",
                _ => "Token validation failed",
            };
            AuthError::TokenRejected {
                message: message.to_string(),
            }
        })
    }
}
