//! Authentication token types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token pair returned after a successful login or refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token (short-lived)
    pub access_token: String,
    /// Opaque refresh token (single-use, rotated on every refresh)
    pub refresh_token: String,
    /// Access token expiration time
    pub expires_at: DateTime<Utc>,
}
