use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// JSON error body: `{ "message": ... }`.
#[derive(Serialize)]
struct ErrorMessage<'a> {
    message: &'a str,
}

/// Wire encoding of an error response body.
///
/// Most of the API answers errors with `{ "message": ... }`; the admin gate
/// answers with a bare string. Existing clients depend on both encodings, so
/// the token errors carry the shape chosen by whichever guard produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBody {
    Json,
    Text,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Access denied. No token provided.")]
    NoToken { body: ErrorBody },
    #[error("Invalid token.")]
    InvalidToken { body: ErrorBody },
    #[error("Access denied. You are not authorized to access this content.")]
    NotAdmin,
    #[error("Invalid ID.")]
    InvalidId,
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoToken { .. } => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken { .. } => StatusCode::BAD_REQUEST,
            AppError::NotAdmin => StatusCode::FORBIDDEN,
            AppError::InvalidId => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Internal detail never crosses the wire;
    /// it stays in the `Display` form for logs.
    fn message(&self) -> &str {
        match self {
            AppError::NoToken { .. } => "Access denied. No token provided.",
            AppError::InvalidToken { .. } => "Invalid token.",
            AppError::NotAdmin => "Access denied. You are not authorized to access this content.",
            AppError::InvalidId => "Invalid ID.",
            AppError::InvalidCredentials => "Invalid email or password.",
            AppError::BadRequest { detail } => detail,
            AppError::NotFound { detail } => detail,
            AppError::Internal { .. } => "Internal server error.",
            AppError::Config { .. } => "Internal server error.",
        }
    }

    /// Body encoding for this error.
    fn shape(&self) -> ErrorBody {
        match self {
            AppError::NoToken { body } => *body,
            AppError::InvalidToken { body } => *body,
            AppError::NotAdmin => ErrorBody::Text,
            _ => ErrorBody::Json,
        }
    }

    pub fn no_token(body: ErrorBody) -> Self {
        Self::NoToken { body }
    }

    pub fn invalid_token(body: ErrorBody) -> Self {
        Self::InvalidToken { body }
    }

    pub fn not_admin() -> Self {
        Self::NotAdmin
    }

    pub fn invalid_id() -> Self {
        Self::InvalidId
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn bad_request(detail: String) -> Self {
        Self::BadRequest { detail }
    }

    pub fn not_found(detail: String) -> Self {
        Self::NotFound { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::internal(format!("password hashing error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        match self.shape() {
            ErrorBody::Json => HttpResponse::build(status).json(ErrorMessage {
                message: self.message(),
            }),
            ErrorBody::Text => HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(self.message().to_string()),
        }
    }
}
