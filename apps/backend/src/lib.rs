#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod error;
pub mod extractors;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::jwt::{mint_access_token, verify_access_token};
pub use error::{AppError, ErrorBody};
pub use extractors::current_user::CurrentUser;
pub use extractors::user_id::UserId;
pub use extractors::validated_json::ValidatedJson;
pub use middleware::cors::cors_middleware;
pub use middleware::guard_chain::{GuardChain, RequestGuard};
pub use middleware::request_log::RequestLog;
pub use middleware::require_admin::RequireAdmin;
pub use middleware::require_user::{RequireUser, AUTH_TOKEN_HEADER};
pub use middleware::validate_id::ValidateId;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use store::object_id::ObjectId;
pub use store::users::{User, UserStore, UserUpdate};

// Prelude for test convenience
pub mod prelude {
    pub use super::auth::claims::*;
    pub use super::auth::jwt::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::state::*;
    pub use super::store::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
