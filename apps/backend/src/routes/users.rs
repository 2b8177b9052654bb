use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::extractors::user_id::UserId;
use crate::extractors::validated_json::ValidatedJson;
use crate::middleware::guard_chain::GuardChain;
use crate::middleware::require_admin::RequireAdmin;
use crate::middleware::require_user::RequireUser;
use crate::middleware::validate_id::ValidateId;
use crate::routes::Envelope;
use crate::state::app_state::AppState;
use crate::store::users::{User, UserUpdate};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Register a new account. Open to anyone; accounts are never created with
/// the admin flag set, whatever the request body says.
async fn create_user(
    req: ValidatedJson<CreateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = req.into_inner();

    // Validate required fields
    if req.name.trim().is_empty() {
        return Err(AppError::bad_request("Name is required.".to_string()));
    }
    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::bad_request(
            "A valid email is required.".to_string(),
        ));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)?;
    let user = app_state
        .users
        .insert(User::new(req.name.trim(), email, password_hash))
        .map_err(|_| AppError::bad_request("User already exists.".to_string()))?;

    info!(user = %user.id, "user created");
    Ok(HttpResponse::Created().json(Envelope::with_message(user, "User created successfully.")))
}

/// List every account. Admin only.
async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Envelope::data(app_state.users.list())))
}

/// Fetch one account. Any authenticated caller may read any profile.
async fn get_user(id: UserId, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let user = app_state
        .users
        .get(&id.0)
        .ok_or_else(|| AppError::not_found("User not found.".to_string()))?;

    Ok(HttpResponse::Ok().json(Envelope::data(user)))
}

/// Update name and/or email on an account.
async fn update_user(
    id: UserId,
    changes: ValidatedJson<UserUpdate>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let changes = changes.into_inner();

    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(AppError::bad_request("Name is required.".to_string()));
        }
    }
    if let Some(email) = &changes.email {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::bad_request(
                "A valid email is required.".to_string(),
            ));
        }
    }

    let user = app_state
        .users
        .update(&id.0, changes)
        .ok_or_else(|| AppError::not_found("User not found.".to_string()))?;

    Ok(HttpResponse::Ok().json(Envelope::with_message(user, "Profile updated successfully.")))
}

/// Remove an account. Admin only.
async fn delete_user(id: UserId, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let removed = app_state
        .users
        .remove(&id.0)
        .ok_or_else(|| AppError::not_found("User not found.".to_string()))?;

    info!(user = %removed.id, "user deleted");
    Ok(HttpResponse::Ok().json(Envelope::message_only("Successfully deleted user.")))
}

/// Per-method guard chains on the account resources.
///
/// Registration and listing share a path but not a policy, as do the three
/// id-addressed methods, so each route carries its own chain. Id-addressed
/// routes validate the identifier before any token work.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/users")
            .route(web::post().to(create_user))
            .route(
                web::get()
                    .to(list_users)
                    .wrap(GuardChain::new().with(RequireAdmin)),
            ),
    )
    .service(
        web::resource("/api/users/{id}")
            .route(
                web::get()
                    .to(get_user)
                    .wrap(GuardChain::new().with(ValidateId).with(RequireUser)),
            )
            .route(
                web::put()
                    .to(update_user)
                    .wrap(GuardChain::new().with(ValidateId).with(RequireUser)),
            )
            .route(
                web::delete()
                    .to(delete_user)
                    .wrap(GuardChain::new().with(ValidateId).with(RequireAdmin)),
            ),
    );
}
