//! Token service: issue, validate and refresh session token pairs.

use tracing::debug;

use franchise_core::config::AuthConfig;
use franchise_core::error::AppError;

use super::claims::{Claims, TokenSubject};
use super::decoder::JwtDecoder;
use super::encoder::{JwtEncoder, TokenPair};

/// Issues and validates session tokens with the process-wide secret.
///
/// There is no revocation store: a refresh token stays usable until its
/// own expiry, and logging out does not invalidate anything.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Build the service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Issue a fresh access + refresh pair.
    pub fn issue(&self, subject: &TokenSubject) -> Result<TokenPair, AppError> {
        self.encoder.issue(subject)
    }

    /// Validate an access token and return its claims.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        self.decoder.decode_access_token(token)
    }

    /// Exchange a valid refresh token for a new pair with the same identity.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;
        debug!(user_id = %claims.sub, "Reissuing token pair from refresh token");
        self.encoder.issue(&claims.subject())
    }

    /// The underlying encoder.
    pub fn encoder(&self) -> &JwtEncoder {
        &self.encoder
    }
}
