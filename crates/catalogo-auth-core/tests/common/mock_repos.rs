//! In-memory user repository for testing
//!
//! Stores the password verbatim in `password_hash`; verification is plain
//! equality. Rotation happens under the dashmap entry lock, which gives the
//! same per-user write serialization the real store guarantees.

use async_trait::async_trait;
use catalogo_db::{DbResult, UserRepository, UserRow};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_username: Arc<DashMap<String, Uuid>>,
    roles: Arc<DashMap<Uuid, Vec<String>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user; the password is stored as its own "hash"
    pub fn insert_user(&self, username: &str, email: &str, password: &str, roles: &[String]) -> Uuid {
        let id = Uuid::new_v4();
        let row = UserRow {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password.to_string(),
            refresh_token: None,
            refresh_token_expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_username.insert(username.to_string(), id);
        self.roles.insert(id, roles.to_vec());
        self.users.insert(id, row);
        id
    }

    /// Read back the stored refresh token, if any
    pub fn stored_refresh_token(&self, username: &str) -> Option<String> {
        let id = *self.by_username.get(username)?;
        self.users.get(&id)?.refresh_token.clone()
    }

    /// Read back the stored refresh expiry, if any
    pub fn stored_refresh_expiry(&self, username: &str) -> Option<DateTime<Utc>> {
        let id = *self.by_username.get(username)?;
        self.users.get(&id)?.refresh_token_expires_at
    }

    /// Overwrite the stored refresh expiry (for horizon tests)
    pub fn force_refresh_expiry(&self, username: &str, expires_at: DateTime<Utc>) {
        if let Some(id) = self.by_username.get(username).map(|r| *r) {
            if let Some(mut user) = self.users.get_mut(&id) {
                user.refresh_token_expires_at = Some(expires_at);
            }
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_username
            .get(username)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn verify_password(&self, user: &UserRow, password: &str) -> DbResult<bool> {
        Ok(user.password_hash == password)
    }

    async fn roles_for_user(&self, user_id: Uuid) -> DbResult<Vec<String>> {
        Ok(self
            .roles
            .get(&user_id)
            .map(|r| r.value().clone())
            .unwrap_or_default())
    }

    async fn set_refresh_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&user_id) {
            user.refresh_token = Some(token.to_string());
            user.refresh_token_expires_at = Some(expires_at);
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        user_id: Uuid,
        previous: &str,
        next: &str,
        next_expires_at: Option<DateTime<Utc>>,
    ) -> DbResult<u64> {
        // Check-and-swap under the entry lock
        if let Some(mut user) = self.users.get_mut(&user_id) {
            if user.refresh_token.as_deref() == Some(previous) {
                user.refresh_token = Some(next.to_string());
                if let Some(expires_at) = next_expires_at {
                    user.refresh_token_expires_at = Some(expires_at);
                }
                user.updated_at = Utc::now();
                return Ok(1);
            }
        }
        Ok(0)
    }

    async fn clear_refresh_token(&self, user_id: Uuid) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&user_id) {
            user.refresh_token = None;
            user.refresh_token_expires_at = None;
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_repo_rotation_is_conditional() {
        let repo = MockUserRepository::new();
        let id = repo.insert_user("bob", "bob@example.com", "pw", &[]);

        repo.set_refresh_token(id, "first", Utc::now() + chrono::Duration::hours(1))
            .await
            .unwrap();

        // Matching previous value rotates
        let rotated = repo
            .rotate_refresh_token(id, "first", "second", None)
            .await
            .unwrap();
        assert_eq!(rotated, 1);

        // Stale previous value does not
        let rotated = repo
            .rotate_refresh_token(id, "first", "third", None)
            .await
            .unwrap();
        assert_eq!(rotated, 0);
        assert_eq!(repo.stored_refresh_token("bob").unwrap(), "second");
    }

    #[tokio::test]
    async fn test_mock_repo_clear() {
        let repo = MockUserRepository::new();
        let id = repo.insert_user("bob", "bob@example.com", "pw", &[]);

        repo.set_refresh_token(id, "tok", Utc::now() + chrono::Duration::hours(1))
            .await
            .unwrap();
        repo.clear_refresh_token(id).await.unwrap();

        assert!(repo.stored_refresh_token("bob").is_none());
        assert!(repo.stored_refresh_expiry("bob").is_none());
    }
}
