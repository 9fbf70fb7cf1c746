//! Catalogo DB - Persistence boundary for the catalog backend
//!
//! Defines the repository trait the auth core depends on, the row models,
//! and the PostgreSQL implementation. Session state (refresh token + expiry)
//! lives on the user row; the store guarantees per-row write serialization,
//! which is what makes refresh-token rotation race-safe.

pub mod error;
pub mod models;
pub mod password;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::*;
pub use models::*;
pub use pool::*;
pub use repo::*;
