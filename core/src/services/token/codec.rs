//! Signs and verifies expiring claims payloads.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::token::SignedClaims;
use crate::errors::{DomainError, DomainResult};

use super::config::TokenConfig;

/// Codec for compact signed tokens (three dot-separated base64url
/// segments: header, payload, signature).
///
/// Sign and verify are pure CPU operations; all session state lives in the
/// external store, never in the codec.
pub struct TokenCodec {
    algorithm: jsonwebtoken::Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec from the signing configuration.
    ///
    /// An empty secret is a fatal startup error, not a per-request one.
    pub fn new(config: &TokenConfig) -> DomainResult<Self> {
        if config.secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT signing secret must not be empty".to_string(),
            });
        }

        let mut validation = Validation::new(config.algorithm);
        // Zero leeway: a token is expired the moment its exp passes.
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            algorithm: config.algorithm,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        })
    }

    /// Signs a claims payload with an expiry of `ttl_secs` from now.
    ///
    /// The payload is wrapped with `iat`/`exp` timing fields; any
    /// serializable claims object round-trips through `sign` then
    /// [`verify`](Self::verify) unchanged.
    pub fn sign<T: Serialize>(&self, claims: T, ttl_secs: i64) -> DomainResult<String> {
        let now = Utc::now().timestamp();
        let signed = SignedClaims {
            claims,
            iat: now,
            exp: now + ttl_secs,
        };

        encode(&Header::new(self.algorithm), &signed, &self.encoding_key).map_err(|e| {
            DomainError::Configuration {
                message: format!("token signing failed: {e}"),
            }
        })
    }

    /// Verifies signature and expiry, returning the embedded claims.
    ///
    /// All failure modes (bad signature, malformed structure, past expiry)
    /// collapse into `InvalidToken` so callers never learn which check
    /// failed.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> DomainResult<SignedClaims<T>> {
        decode::<SignedClaims<T>>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::InvalidToken)
    }

    /// Decodes the payload without checking signature or expiry.
    ///
    /// Diagnostic use only; never an input to authorization decisions.
    /// Fails only when the token cannot be structurally parsed. The
    /// algorithm comes from the token's own header, so tokens signed
    /// with a foreign algorithm still decode here.
    pub fn decode_unsafe<T: DeserializeOwned>(&self, token: &str) -> DomainResult<SignedClaims<T>> {
        let header = jsonwebtoken::decode_header(token).map_err(|_| DomainError::InvalidToken)?;

        let mut validation = Validation::new(header.alg);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<SignedClaims<T>>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::InvalidToken)
    }
}
