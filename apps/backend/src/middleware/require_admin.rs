//! Authorization guard.
//!
//! Runs the same presence and verification steps as the authentication
//! guard, then additionally requires the admin flag on the decoded claims.
//! Rejections answer with a plain-text body, which is what clients of the
//! admin endpoints have always received.

use actix_web::dev::ServiceRequest;
use actix_web::HttpMessage;

use crate::error::{AppError, ErrorBody};
use crate::middleware::guard_chain::RequestGuard;
use crate::middleware::require_user::verify_request_token;

/// Guard stage requiring a valid token whose claims carry the admin flag.
///
/// The flag is only consulted after the signature checks pass, so a forged
/// admin token is rejected as invalid, not as forbidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAdmin;

impl RequestGuard for RequireAdmin {
    fn name(&self) -> &'static str {
        "require_admin"
    }

    fn check(&self, req: &ServiceRequest) -> Result<(), AppError> {
        let claims = verify_request_token(req, ErrorBody::Text)?;
        if !claims.is_admin {
            return Err(AppError::not_admin());
        }
        req.extensions_mut().insert(claims);
        Ok(())
    }
}
