//! Cryptographic utilities for secure operations
//!
//! This module provides the refresh token generator and the constant-time
//! comparison used when validating presented refresh tokens.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;

use crate::AuthError;

/// Raw entropy per refresh token, before Base64 encoding
pub const REFRESH_TOKEN_BYTES: usize = 128;

/// Generate a high-entropy, opaque refresh token.
///
/// Draws from the OS CSPRNG only. If the entropy source is unavailable this
/// fails; it never degrades to a weaker randomness source.
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        tracing::error!("OS entropy source unavailable: {}", e);
        AuthError::Internal("entropy source unavailable".to_string())
    })?;

    Ok(STANDARD.encode(bytes))
}

/// Constant-time byte slice comparison.
///
/// Comparison time depends only on the length of the slices, not their
/// contents. Length mismatch returns `false` immediately; length is not
/// secret here.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_entropy_length() {
        let token = generate_refresh_token().unwrap();
        let decoded = STANDARD.decode(&token).unwrap();
        assert_eq!(decoded.len(), REFRESH_TOKEN_BYTES);
    }

    #[test]
    fn test_refresh_tokens_never_repeat() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..256 {
            assert!(seen.insert(generate_refresh_token().unwrap()));
        }
    }

    #[test]
    fn test_constant_time_eq_equal() {
        assert!(constant_time_eq(b"hello world", b"hello world"));
    }

    #[test]
    fn test_constant_time_eq_different() {
        assert!(!constant_time_eq(b"hello world", b"hello worle"));
    }

    #[test]
    fn test_constant_time_eq_different_lengths() {
        assert!(!constant_time_eq(b"hello", b"hello world"));
    }

    #[test]
    fn test_constant_time_eq_empty() {
        assert!(constant_time_eq(b"", b""));
    }
}
