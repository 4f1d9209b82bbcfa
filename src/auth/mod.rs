pub mod validator;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Role;

pub use validator::{JwtValidator, TokenValidator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    #[serde(default)]
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims valid for `expiry_hours` from now. Fails when the expiry
    /// does not fit in a timestamp.
    pub fn new(sub: impl Into<String>, role: Role, expiry_hours: u64) -> Result<Self, JwtError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(JwtError::InvalidExpiry(expiry_hours))?;

        Ok(Self {
            sub: sub.into(),
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

/// Machine-readable reason attached to every [`AuthError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthReason {
    Malformed,
    Expired,
    InvalidSignature,
    Invalid,
}

impl AuthReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthReason::Malformed => "MALFORMED",
            AuthReason::Expired => "EXPIRED",
            AuthReason::InvalidSignature => "INVALID_SIGNATURE",
            AuthReason::Invalid => "INVALID",
        }
    }
}

/// Authentication failure. Always surfaces to clients as a 401.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    message: String,
    reason: AuthReason,
}

impl AuthError {
    pub fn new(message: impl Into<String>, reason: AuthReason) -> Self {
        Self {
            message: message.into(),
            reason,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(message, AuthReason::Malformed)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn reason(&self) -> AuthReason {
        self.reason
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Token lifetime of {0} hours is out of range")]
    InvalidExpiry(u64),
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_expire_after_requested_hours() {
        let claims = Claims::new("42", Role::Admin, 2).unwrap();
        assert_eq!(claims.exp - claims.iat, 2 * 3600);
        assert_eq!(claims.sub, "42");
    }

    #[test]
    fn out_of_range_expiry_is_an_error() {
        for hours in [3_000_000_000, 3_000_000_000_000, u64::MAX] {
            assert!(matches!(
                Claims::new("42", Role::User, hours),
                Err(JwtError::InvalidExpiry(h)) if h == hours
            ));
        }
    }

    #[test]
    fn generate_requires_secret() {
        let claims = Claims::new("42", Role::User, 1).unwrap();
        assert!(matches!(generate_jwt(&claims, ""), Err(JwtError::InvalidSecret)));
        let token = generate_jwt(&claims, "s3cret").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(AuthReason::Malformed.as_str(), "MALFORMED");
        assert_eq!(AuthReason::InvalidSignature.as_str(), "INVALID_SIGNATURE");
        assert_eq!(serde_json::to_string(&AuthReason::Expired).unwrap(), "\"EXPIRED\"");
    }
}
