use super::security_config::SecurityConfig;
use crate::store::users::UserStore;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// In-memory user store backing the account routes
    pub users: UserStore,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    /// Create a new AppState with the given user store and security config
    pub fn new(users: UserStore, security: SecurityConfig) -> Self {
        Self { users, security }
    }

    /// Create a test AppState with an empty store and a default security config
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(UserStore::new(), SecurityConfig::default())
    }
}
