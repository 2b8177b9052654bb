//! Path identifier validation.
//!
//! Rejects malformed `{id}` path parameters before any token work happens.
//! A malformed id answers 404, indistinguishable from a record that does
//! not exist, so probing for valid id shapes reveals nothing.

use actix_web::dev::ServiceRequest;

use crate::error::AppError;
use crate::middleware::guard_chain::RequestGuard;
use crate::store::object_id::ObjectId;

/// Guard stage requiring the `{id}` path parameter to be a well-formed
/// 24-hex identifier. Missing counts as malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateId;

impl RequestGuard for ValidateId {
    fn name(&self) -> &'static str {
        "validate_id"
    }

    fn check(&self, req: &ServiceRequest) -> Result<(), AppError> {
        let raw = req.match_info().get("id").unwrap_or_default();
        if !ObjectId::is_valid(raw) {
            return Err(AppError::invalid_id());
        }
        Ok(())
    }
}
