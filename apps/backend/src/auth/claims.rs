//! Access-token claims used across the application.

use serde::{Deserialize, Serialize};

/// Claims structure inserted into request extensions by the token guards.
///
/// A request carries these claims exactly when a verifying guard admitted
/// it, so handlers can read them without re-checking the token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's hex id
    pub sub: String,
    /// Admin flag. The wire name is kept for compatibility with tokens
    /// issued before the Rust rewrite; tokens without it are non-admin.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
