//! Row models

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User row, including the per-user session record.
///
/// `refresh_token` and `refresh_token_expires_at` together form the session
/// record: at most one live refresh token per user. A `NULL` token means the
/// session is revoked; a later login reuses the same columns.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Check whether the stored refresh token is still within its horizon
    pub fn refresh_token_live(&self, now: DateTime<Utc>) -> bool {
        match (&self.refresh_token, self.refresh_token_expires_at) {
            (Some(_), Some(expires_at)) => expires_at > now,
            _ => false,
        }
    }
}
