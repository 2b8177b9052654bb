pub mod cors;
pub mod guard_chain;
pub mod request_log;
pub mod require_admin;
pub mod require_user;
pub mod validate_id;

pub use cors::cors_middleware;
pub use guard_chain::{GuardChain, RequestGuard};
pub use request_log::RequestLog;
pub use require_admin::RequireAdmin;
pub use require_user::{RequireUser, AUTH_TOKEN_HEADER};
pub use validate_id::ValidateId;
