use actix_web::web;
use serde::Serialize;

pub mod auth;
pub mod users;

/// Success envelope shared by every endpoint: `data` and/or `message`,
/// with absent fields omitted from the JSON.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: &'static str) -> Self {
        Self {
            data: Some(data),
            message: Some(message),
        }
    }
}

impl Envelope<()> {
    /// Envelope carrying only a message.
    pub fn message_only(message: &'static str) -> Self {
        Self {
            data: None,
            message: Some(message),
        }
    }
}

/// Configure application routes.
///
/// Both `main.rs` and the test harnesses register routes through this one
/// function, so every test exercises the same guard chains production runs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .configure(auth::configure_routes)
        .configure(users::configure_routes);
}
