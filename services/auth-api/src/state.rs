//! Application state

use std::sync::Arc;

use catalogo_auth_core::AuthService;
use catalogo_db::UserRepository;

/// Auth service over whichever user store the binary (or a test) wires in
pub type AuthServiceImpl = AuthService<dyn UserRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for the session lifecycle operations
    pub auth: Arc<AuthServiceImpl>,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: AuthServiceImpl) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}
