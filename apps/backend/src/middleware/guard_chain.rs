//! Ordered guard pipeline applied to a single route.
//!
//! Each protected route declares one [`GuardChain`] listing its stages in
//! order (identifier checks first, then token checks). The chain runs before
//! the handler; the first stage to reject answers the request and no later
//! stage or handler code executes. Stages communicate with handlers through
//! request extensions.

use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::error::AppError;

/// One stage of a [`GuardChain`].
///
/// A stage inspects the request and either admits it (`Ok`) or rejects it
/// with the error that becomes the response. Stages may attach data to the
/// request extensions for the handler, but must not do so when rejecting.
pub trait RequestGuard {
    /// Stage name used in logs.
    fn name(&self) -> &'static str;

    /// Admit or reject the request before it reaches the handler.
    fn check(&self, req: &ServiceRequest) -> Result<(), AppError>;
}

/// Ordered list of guard stages for one route.
///
/// ```ignore
/// web::get()
///     .to(get_user)
///     .wrap(GuardChain::new().with(ValidateId).with(RequireUser))
/// ```
#[derive(Default)]
pub struct GuardChain {
    guards: Vec<Rc<dyn RequestGuard>>,
}

impl GuardChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage to the end of the pipeline.
    pub fn with<G: RequestGuard + 'static>(mut self, guard: G) -> Self {
        self.guards.push(Rc::new(guard));
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for GuardChain
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = GuardChainMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GuardChainMiddleware {
            service,
            guards: self.guards.clone(),
        }))
    }
}

pub struct GuardChainMiddleware<S> {
    service: S,
    guards: Vec<Rc<dyn RequestGuard>>,
}

impl<S, B> Service<ServiceRequest> for GuardChainMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        for guard in &self.guards {
            if let Err(err) = guard.check(&req) {
                debug!(
                    stage = guard.name(),
                    status = %err.status(),
                    "guard rejected request"
                );
                return Box::pin(ready(Err(err.into())));
            }
        }

        Box::pin(self.service.call(req))
    }
}
