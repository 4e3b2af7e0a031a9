//! Session token issuance and verification
//!
//! Tokens are HS256 JWTs carrying the account id as `sub` and an absolute
//! `exp`. Nothing is persisted, so a token stays valid until it expires.
//! Keys are derived from the secret once and shared through `Arc`.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use patient_records_shared::{AccountId, TokenError};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &Secret<String>) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: Arc::new(EncodingKey::from_secret(bytes)),
            decoding: Arc::new(DecodingKey::from_secret(bytes)),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service for issuing and verifying session tokens
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    validation: Arc<Validation>,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &Secret<String>, token_expiry_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `verify`
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            validation: Arc::new(validation),
            ttl: Duration::seconds(token_expiry_secs),
        }
    }

    /// Issue a token for `subject` that expires one TTL after `now`
    pub fn issue(&self, subject: AccountId, now: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue session token: {}", e))
    }

    /// Verify a token and return its subject
    ///
    /// The signature is checked before any claim is trusted, and the token
    /// is only accepted while `exp` is strictly after `now`.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccountId, TokenError> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        claims.sub.parse::<AccountId>().map_err(|_| TokenError::Malformed)
    }
}
