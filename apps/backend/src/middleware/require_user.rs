//! Authentication guard.
//!
//! Admits any request that presents a valid access token in the
//! `x-auth-token` header and stores the decoded claims in the request
//! extensions for the handler. Rejections answer in JSON.

use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use tracing::debug;

use crate::auth::claims::Claims;
use crate::auth::jwt::verify_access_token;
use crate::error::{AppError, ErrorBody};
use crate::middleware::guard_chain::RequestGuard;
use crate::state::app_state::AppState;

/// Header that carries the access token on every authenticated request.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Guard stage requiring a valid token, admin or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireUser;

impl RequestGuard for RequireUser {
    fn name(&self) -> &'static str {
        "require_user"
    }

    fn check(&self, req: &ServiceRequest) -> Result<(), AppError> {
        let claims = verify_request_token(req, ErrorBody::Json)?;
        req.extensions_mut().insert(claims);
        Ok(())
    }
}

/// Shared presence and verification steps for both token guards.
///
/// `body` picks the wire encoding of any rejection, since the two guards
/// answer in different shapes. An empty header value counts as missing.
pub(crate) fn verify_request_token(
    req: &ServiceRequest,
    body: ErrorBody,
) -> Result<Claims, AppError> {
    let header = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .ok_or_else(|| AppError::no_token(body))?;

    let token = header
        .to_str()
        .map_err(|_| AppError::invalid_token(body))?;
    if token.is_empty() {
        return Err(AppError::no_token(body));
    }

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

    verify_access_token(token, &state.security).map_err(|e| {
        debug!(error = %e, "token verification failed");
        AppError::invalid_token(body)
    })
}
