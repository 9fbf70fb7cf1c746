//! Shared test fixtures

pub mod mock_repos;

use catalogo_auth_core::{AuthConfig, AuthService};
use mock_repos::MockUserRepository;
use std::sync::Arc;
use std::time::Duration;

/// Config with a valid secret and short, test-friendly TTLs
pub fn test_config() -> AuthConfig {
    AuthConfig::try_new(
        "0123456789abcdef0123456789abcdef",
        "catalogo-api",
        "catalogo-clients",
    )
    .expect("test secret is valid")
    .with_access_token_ttl(Duration::from_secs(1800))
    .with_refresh_token_ttl(Duration::from_secs(3600))
}

/// Service over an in-memory store with one seeded user
pub fn service_with_alice(
    config: AuthConfig,
) -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    let repo = Arc::new(MockUserRepository::new());
    repo.insert_user(
        "alice",
        "alice@example.com",
        "s3cret-password",
        &["admin".to_string()],
    );
    (AuthService::new(config, Arc::clone(&repo)), repo)
}
