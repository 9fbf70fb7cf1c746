//! Access token issuance and validation
//!
//! Access tokens are HS256 JWTs. Besides the usual full validation there is
//! an expired-claims extraction path used to authorize refresh: it verifies
//! the signature and the exact signing algorithm but deliberately skips
//! expiry, issuer, and audience checks.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalogo_types::Identity;

use crate::{AuthConfig, AuthError};

/// Claims embedded in an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (username)
    pub sub: String,
    /// Email address
    pub email: String,
    /// Role labels
    #[serde(default)]
    pub roles: Vec<String>,
    /// Unique per-issuance token identifier
    pub jti: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// Access token together with its expiry
#[derive(Debug, Clone)]
pub struct IssuedAccessToken {
    /// Encoded, signed token
    pub token: String,
    /// Expiration time (`exp` claim)
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates access tokens with a symmetric key.
///
/// The keys are derived once from the validated [`AuthConfig`]; construction
/// is infallible because the config constructor already rejects missing or
/// short secrets.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    access_token_ttl: ChronoDuration,
}

/// The only algorithm this service signs or accepts
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

impl TokenIssuer {
    /// Create a token issuer from a validated config
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_token_ttl: ChronoDuration::seconds(config.access_token_ttl.as_secs() as i64),
        }
    }

    /// Issue a signed access token for the given identity.
    ///
    /// The claim set is rebuilt on every issuance with a fresh `jti`.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedAccessToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.access_token_ttl;

        let claims = AccessClaims {
            sub: identity.username.clone(),
            email: identity.email.clone(),
            roles: identity.roles.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        let token = encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign access token: {}", e);
                AuthError::Internal("failed to sign access token".to_string())
            })?;

        Ok(IssuedAccessToken { token, expires_at })
    }

    /// Fully validate an access token: signature, expiry, issuer, audience.
    pub fn validate(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Access token validation failed: {}", e);
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        Ok(data.claims)
    }

    /// Recover the claim set from an access token whose lifetime may have
    /// elapsed, as a prerequisite for refresh.
    ///
    /// Verifies the signature and that the token was signed with exactly
    /// [`SIGNING_ALGORITHM`]; expiry, issuer, and audience are not checked.
    /// A token whose signature does not verify is never accepted.
    pub fn extract_expired_claims(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Failed to decode token header: {}", e);
            AuthError::InvalidToken
        })?;

        // Exact algorithm identity, not just "some algorithm the key fits".
        // Guards against algorithm-substitution attacks.
        if header.alg != SIGNING_ALGORITHM {
            tracing::debug!("Token algorithm mismatch: {:?}", header.alg);
            return Err(AuthError::InvalidToken);
        }

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;
        validation.validate_aud = false;

        let data = decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Expired-claims extraction failed: {}", e);
            AuthError::InvalidToken
        })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}
