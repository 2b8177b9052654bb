use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::routes::Envelope;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Exchange email and password for a signed access token.
///
/// Unknown email and wrong password answer identically, so the endpoint
/// does not confirm which emails are registered.
async fn login(
    req: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    // Validate required fields
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request("Email cannot be empty.".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::bad_request(
            "Password cannot be empty.".to_string(),
        ));
    }

    let user = app_state
        .users
        .find_by_email(req.email.trim())
        .ok_or_else(AppError::invalid_credentials)?;

    if !bcrypt::verify(&req.password, &user.password_hash)? {
        return Err(AppError::invalid_credentials());
    }

    let token = mint_access_token(
        user.id.as_str(),
        user.is_admin,
        SystemTime::now(),
        &app_state.security,
    )?;

    info!(user = %user.id, "user signed in");
    Ok(HttpResponse::Ok().json(Envelope::with_message(token, "Signed in successfully.")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/login").route(web::post().to(login)));
}
