//! Configuration types for the auth core

use std::time::Duration;

use crate::AuthError;

/// Auth core configuration.
///
/// Built once at startup and passed immutably to [`crate::AuthService`];
/// a missing or short signing secret fails construction, never a request.
#[derive(Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret for access tokens
    pub secret: String,
    /// Token issuer (`iss` claim)
    pub issuer: String,
    /// Token audience (`aud` claim)
    pub audience: String,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime, measured from login
    pub refresh_token_ttl: Duration,
    /// When true, rotation re-extends the refresh expiry (sliding session).
    /// When false, the horizon set at login is fixed and refresh must happen
    /// before it.
    pub sliding_refresh_expiry: bool,
}

impl AuthConfig {
    /// Minimum allowed secret length in bytes (256 bits)
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new auth config, validating the signing secret.
    ///
    /// # Errors
    /// Returns [`AuthError::Configuration`] if the secret is empty or
    /// shorter than [`Self::MIN_SECRET_LENGTH`] bytes.
    pub fn try_new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::Configuration(
                "signing secret is not set".to_string(),
            ));
        }
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "signing secret too short: got {} bytes, need at least {}",
                secret.len(),
                Self::MIN_SECRET_LENGTH
            )));
        }

        Ok(Self {
            secret,
            issuer: issuer.into(),
            audience: audience.into(),
            access_token_ttl: Duration::from_secs(30 * 60),
            refresh_token_ttl: Duration::from_secs(24 * 60 * 60),
            sliding_refresh_expiry: false,
        })
    }

    /// Set the access token lifetime
    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    /// Set the refresh token lifetime
    pub fn with_refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = ttl;
        self
    }

    /// Enable or disable the sliding refresh expiry policy
    pub fn with_sliding_refresh_expiry(mut self, sliding: bool) -> Self {
        self.sliding_refresh_expiry = sliding;
        self
    }
}

// Manual impl so the signing secret never reaches logs
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("sliding_refresh_expiry", &self.sliding_refresh_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        let result = AuthConfig::try_new("", "catalogo", "catalogo-clients");
        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = AuthConfig::try_new("too-short", "catalogo", "catalogo-clients");
        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_valid_secret_accepted() {
        let config = AuthConfig::try_new("a".repeat(32), "catalogo", "catalogo-clients").unwrap();
        assert_eq!(config.access_token_ttl, Duration::from_secs(1800));
        assert!(!config.sliding_refresh_expiry);
    }

    #[test]
    fn test_builders() {
        let config = AuthConfig::try_new("a".repeat(32), "catalogo", "catalogo-clients")
            .unwrap()
            .with_access_token_ttl(Duration::from_secs(60))
            .with_refresh_token_ttl(Duration::from_secs(120))
            .with_sliding_refresh_expiry(true);
        assert_eq!(config.access_token_ttl, Duration::from_secs(60));
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(120));
        assert!(config.sliding_refresh_expiry);
    }
}
