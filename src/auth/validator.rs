use jsonwebtoken::errors::{Error as JwtDecodeError, ErrorKind};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::{AuthError, AuthReason, Claims};

/// Turns an `Authorization` header value into claims.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, header_value: &str, secret: &str) -> Result<Claims, AuthError>;
}

/// HS256 bearer token validation.
///
/// Accepts `Bearer <token>` (scheme matched case-insensitively) or a bare token.
#[derive(Debug, Clone)]
pub struct JwtValidator {
    validation: Validation,
}

impl Default for JwtValidator {
    fn default() -> Self {
        Self {
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenValidator for JwtValidator {
    fn validate(&self, header_value: &str, secret: &str) -> Result<Claims, AuthError> {
        let token = extract_bearer(header_value)?;

        if secret.is_empty() {
            return Err(AuthError::new("JWT secret not configured", AuthReason::Invalid));
        }

        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let token_data = decode::<Claims>(token, &decoding_key, &self.validation)?;

        Ok(token_data.claims)
    }
}

fn extract_bearer(header_value: &str) -> Result<&str, AuthError> {
    let value = header_value.trim();
    let token = match value.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer ") => &value[7..],
        _ => value,
    };

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::malformed("Empty JWT token"));
    }
    Ok(token)
}

impl From<JwtDecodeError> for AuthError {
    fn from(err: JwtDecodeError) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::new("Token has expired", AuthReason::Expired),
            ErrorKind::InvalidSignature => {
                AuthError::new("Invalid token signature", AuthReason::InvalidSignature)
            }
            ErrorKind::ImmatureSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingRequiredClaim(_) => {
                AuthError::new(format!("Invalid JWT token: {}", err), AuthReason::Invalid)
            }
            _ => AuthError::malformed(format!("Malformed JWT token: {}", err)),
        }
    }
}
