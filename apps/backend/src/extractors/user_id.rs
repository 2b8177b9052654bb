use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::store::object_id::ObjectId;

/// User id extracted from the `{id}` route path parameter and parsed into
/// canonical form.
///
/// Guarded routes have already validated the shape; parsing again here also
/// covers any route wired without the validator, with the same 404 answer.
#[derive(Debug, Clone)]
pub struct UserId(pub ObjectId);

impl FromRequest for UserId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let raw = req
                .match_info()
                .get("id")
                .ok_or_else(AppError::invalid_id)?;

            let id = ObjectId::parse(raw).ok_or_else(AppError::invalid_id)?;
            Ok(UserId(id))
        })
    }
}
