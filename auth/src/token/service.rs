use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). Verification is a pure function of the
/// token string, the secret, and the current clock - no server-side session
/// state is kept, and issued tokens expire naturally rather than being
/// revoked.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret, fixed for the process lifetime
    /// * `lifetime_minutes` - Minutes until an issued token expires
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], lifetime_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime: Duration::minutes(lifetime_minutes),
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// The embedded expiry is set to now plus the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - Identity identifier to embed
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `IssuanceFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::new(subject, self.lifetime);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::IssuanceFailed(e.to_string()))
    }

    /// Verify a token and return its embedded subject.
    ///
    /// The subject is returned as a raw identifier. Whether it still resolves
    /// to a live identity is the caller's concern; a token for an account
    /// deleted since issuance still decodes here.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    ///
    /// # Returns
    /// The subject identifier embedded in the token
    ///
    /// # Errors
    /// * `Expired` - Current time is past the embedded expiry
    /// * `Invalid` - Signature does not validate or token is malformed
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims.sub)
    }
}
