//! Catalogo Auth API
//!
//! Authentication service for the catalog backend: login, refresh token
//! rotation, and session revocation over REST. The router is built here so
//! HTTP-level tests can drive it without binding a socket.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the service router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route("/api/v1/auth/refresh", post(handlers::auth::refresh))
        .route(
            "/api/v1/auth/revoke/{username}",
            post(handlers::auth::revoke),
        )
        .with_state(state)
}
