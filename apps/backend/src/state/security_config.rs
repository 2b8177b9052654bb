use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Configuration for JWT security settings
///
/// Built once at startup from the environment and injected everywhere a
/// token is minted or verified. Nothing below this type reads process
/// globals, so tests can run several differently-keyed instances at once.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Lifetime of newly minted tokens
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Default token lifetime: seven days.
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the token lifetime.
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
