//! JWT token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use franchise_core::config::AuthConfig;
use franchise_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates HS256 tokens signed with the process secret.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    ///
    /// Only HS256 is accepted, so a token whose header names another
    /// algorithm is rejected before its signature is checked.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_typed(token, TokenType::Access)
    }

    /// Decodes and validates a refresh token.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_typed(token, TokenType::Refresh)
    }

    fn decode_typed(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Token rejected");
                match e.kind() {
                    JwtErrorKind::ExpiredSignature => AppError::authentication("Token has expired"),
                    JwtErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    JwtErrorKind::InvalidAlgorithm => {
                        AppError::authentication("Unexpected token signing algorithm")
                    }
                    JwtErrorKind::MissingRequiredClaim(claim) => {
                        AppError::authentication(format!("Token is missing the '{claim}' claim"))
                    }
                    _ => AppError::authentication("Invalid token"),
                }
            })?
            .claims;

        if claims.token_type != expected {
            return Err(AppError::authentication(match expected {
                TokenType::Access => "Invalid token type: expected access token",
                TokenType::Refresh => "Invalid token type: expected refresh token",
            }));
        }

        Ok(claims)
    }
}
