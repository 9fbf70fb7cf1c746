//! Auth orchestrator - drives login, refresh, and revoke flows
//!
//! Composes the token issuer, refresh token generator, and the user store.
//! All session state lives in the store; the service itself holds only the
//! immutable config and signing keys, so every request is independent.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::sync::Arc;

use catalogo_db::UserRepository;
use catalogo_types::{Identity, TokenPair, UserId};

use crate::{
    config::AuthConfig,
    crypto::{constant_time_eq, generate_refresh_token},
    token::{AccessClaims, TokenIssuer},
    AuthError,
};

/// Authentication service
///
/// Provides the session lifecycle operations:
/// - `login`: credentials -> fresh token pair, superseding any prior session
/// - `refresh`: expired access token + live refresh token -> rotated pair
/// - `revoke`: invalidate a user's refresh token
pub struct AuthService<U: UserRepository + ?Sized> {
    config: AuthConfig,
    issuer: TokenIssuer,
    users: Arc<U>,
}

impl<U: UserRepository + ?Sized> AuthService<U> {
    /// Create a new auth service from a validated config
    pub fn new(config: AuthConfig, users: Arc<U>) -> Self {
        Self {
            issuer: TokenIssuer::new(&config),
            config,
            users,
        }
    }

    /// Authenticate with username and password and start a session.
    ///
    /// Writing the new refresh token overwrites whatever token was stored
    /// before, so a successful login revokes the previous session.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.users.verify_password(&user, password).await? {
            tracing::debug!(username, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        let roles = self.users.roles_for_user(user.id).await?;
        let identity = Identity {
            id: UserId(user.id),
            username: user.username.clone(),
            email: user.email.clone(),
            roles,
        };

        let issued = self.issuer.issue(&identity)?;
        let refresh_token = generate_refresh_token()?;
        let refresh_expires_at = self.refresh_horizon();

        self.users
            .set_refresh_token(user.id, &refresh_token, refresh_expires_at)
            .await?;

        tracing::debug!(username, "Session established");

        Ok(TokenPair {
            access_token: issued.token,
            refresh_token,
            expires_at: issued.expires_at,
        })
    }

    /// Rotate a session: exchange an expired access token plus its refresh
    /// token for a fresh pair.
    ///
    /// The stored refresh token must match the presented one exactly and its
    /// horizon must still be in the future. The store-side rotation is
    /// conditional on the previous token value, so of two concurrent calls
    /// with the same token exactly one wins; the loser fails with
    /// `InvalidToken` and no state is mutated on any failure path.
    pub async fn refresh(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<TokenPair, AuthError> {
        let claims = self.issuer.extract_expired_claims(access_token)?;

        let user = self
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let stored = user.refresh_token.as_deref().ok_or(AuthError::InvalidToken)?;
        if !constant_time_eq(stored.as_bytes(), refresh_token.as_bytes()) {
            tracing::debug!(username = %claims.sub, "Refresh token mismatch");
            return Err(AuthError::InvalidToken);
        }

        if !user.refresh_token_live(Utc::now()) {
            tracing::debug!(username = %claims.sub, "Refresh token past its horizon");
            return Err(AuthError::InvalidToken);
        }

        // New access token from the same claim set, fresh jti.
        let identity = Identity {
            id: UserId(user.id),
            username: claims.sub.clone(),
            email: claims.email.clone(),
            roles: claims.roles.clone(),
        };
        let issued = self.issuer.issue(&identity)?;
        let next_refresh = generate_refresh_token()?;

        let next_expiry = self
            .config
            .sliding_refresh_expiry
            .then(|| self.refresh_horizon());

        let rotated = self
            .users
            .rotate_refresh_token(user.id, refresh_token, &next_refresh, next_expiry)
            .await?;
        if rotated == 0 {
            tracing::debug!(username = %claims.sub, "Lost refresh rotation race");
            return Err(AuthError::InvalidToken);
        }

        Ok(TokenPair {
            access_token: issued.token,
            refresh_token: next_refresh,
            expires_at: issued.expires_at,
        })
    }

    /// Revoke a user's session by clearing the stored refresh token.
    ///
    /// Access tokens already issued stay valid until their own expiry;
    /// revocation only blocks future refreshes.
    pub async fn revoke(&self, username: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.users.clear_refresh_token(user.id).await?;
        tracing::debug!(username, "Session revoked");

        Ok(())
    }

    /// Fully validate an access token (signature, expiry, issuer, audience).
    ///
    /// Used to authenticate callers of protected endpoints such as revoke.
    pub fn validate_access_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        self.issuer.validate(token)
    }

    fn refresh_horizon(&self) -> DateTime<Utc> {
        Utc::now() + ChronoDuration::seconds(self.config.refresh_token_ttl.as_secs() as i64)
    }
}

impl<U: UserRepository + ?Sized> std::fmt::Debug for AuthService<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
