//! Catalogo Types - Shared domain types
//!
//! Domain types used across the catalog services:
//! - User identity
//! - Authentication token pairs

pub mod token;
pub mod user;

pub use token::*;
pub use user::*;
