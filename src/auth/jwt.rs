//! JWT token generation and validation

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::config::JwtConfig;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Identity the token was issued for
    pub username: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expiration timestamp (unix seconds)
    pub exp: u64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("access token required")]
    Missing,

    #[error("invalid or expired token")]
    InvalidOrExpired,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("system clock is before unix epoch")]
    Clock,
}

/// Issues and verifies HS256 tokens with a single key held for the life of
/// the process.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime_seconds: u64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared in `verify_at` against the caller's clock
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            lifetime_seconds: config.expiration_seconds,
        }
    }

    pub fn lifetime_seconds(&self) -> u64 {
        self.lifetime_seconds
    }

    /// Issue a token for `username` valid from now.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, unix_now()?)
    }

    pub fn issue_at(&self, username: &str, now: u64) -> Result<String, TokenError> {
        let claims = Claims {
            username: username.to_string(),
            iat: now,
            exp: now.saturating_add(self.lifetime_seconds),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify signature and expiry, returning the embedded identity.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, unix_now()?)
    }

    pub fn verify_at(&self, token: &str, now: u64) -> Result<String, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                TokenError::InvalidOrExpired
            })?;

        if now >= token_data.claims.exp {
            tracing::debug!(exp = token_data.claims.exp, now, "token expired");
            return Err(TokenError::InvalidOrExpired);
        }

        Ok(token_data.claims.username)
    }
}

fn unix_now() -> Result<u64, TokenError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| TokenError::Clock)
}
