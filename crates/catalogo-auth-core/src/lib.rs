//! Catalogo Auth Core - Session and credential lifecycle
//!
//! Core authentication functionality: signed access token issuance,
//! single-use refresh token rotation, expired-token claims recovery,
//! and session revocation.

pub mod config;
pub mod crypto;
pub mod error;
pub mod service;
pub mod token;

pub use config::*;
pub use crypto::{constant_time_eq, generate_refresh_token, REFRESH_TOKEN_BYTES};
pub use error::*;
pub use service::*;
pub use token::*;
