//! Repository traits
//!
//! Async interface between the auth core and the user store. The store must
//! apply `rotate_refresh_token` atomically per user row (a single conditional
//! update keyed on the previous token value) so that two concurrent refresh
//! calls with the same token cannot both succeed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::UserRow;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login name
    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>>;

    /// Check a password against the user's stored credential
    async fn verify_password(&self, user: &UserRow, password: &str) -> DbResult<bool>;

    /// Role labels granted to the user
    async fn roles_for_user(&self, user_id: Uuid) -> DbResult<Vec<String>>;

    /// Write a fresh refresh token + expiry, superseding any prior session
    async fn set_refresh_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> DbResult<()>;

    /// Replace the refresh token only if the stored value still equals
    /// `previous`. Returns the number of rows updated: 0 means another
    /// rotation won the race (or the token was revoked in between).
    ///
    /// When `next_expires_at` is `None` the stored expiry is left untouched
    /// (fixed-horizon policy); `Some` rewrites it (sliding policy).
    async fn rotate_refresh_token(
        &self,
        user_id: Uuid,
        previous: &str,
        next: &str,
        next_expires_at: Option<DateTime<Utc>>,
    ) -> DbResult<u64>;

    /// Clear the refresh token, revoking the session
    async fn clear_refresh_token(&self, user_id: Uuid) -> DbResult<()>;
}
