#![allow(dead_code)]

// tests/common/mod.rs
use std::time::{Duration, SystemTime};

use actix_http::Request;
use actix_web::body::{to_bytes, BoxBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{test, web, App, Error};
use backend::auth::jwt::mint_access_token;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::store::object_id::ObjectId;
use backend::store::users::{User, UserStore};
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// Fresh application state with an empty store and the test signing key.
pub fn test_state() -> AppState {
    AppState::new(UserStore::new(), test_security())
}

/// Seed a user directly into the store, bypassing the HTTP surface.
///
/// Uses a low bcrypt cost to keep the suite fast; hash strength is
/// irrelevant here.
pub fn seed_user(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
    is_admin: bool,
) -> User {
    let password_hash = bcrypt::hash(password, 4).expect("hash test password");
    let user = User {
        id: ObjectId::generate(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash,
        is_admin,
    };
    state.users.insert(user).expect("seed user")
}

/// Mint a token for the given subject
pub fn mint_test_token(sub: &str, is_admin: bool, sec: &SecurityConfig) -> String {
    mint_access_token(sub, is_admin, SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Mint a token whose expiry is comfortably past any verification leeway
pub fn mint_expired_token(sub: &str, is_admin: bool, sec: &SecurityConfig) -> String {
    let past = SystemTime::now() - (sec.token_ttl + Duration::from_secs(7200));
    mint_access_token(sub, is_admin, past, sec).expect("should mint expired token successfully")
}

/// Build the application exactly as production wires it, minus the outer
/// CORS and logging layers.
pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// Drive one request through the app and normalize the outcome.
///
/// Guard rejections surface as service errors rather than responses, so
/// both paths are folded into (status, headers, body bytes).
pub async fn call_capture<S>(app: &S, req: Request) -> (StatusCode, HeaderMap, Bytes)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    match app.call(req).await {
        Ok(resp) => {
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = test::read_body(resp).await;
            (status, headers, body)
        }
        Err(err) => {
            let resp = err.as_response_error().error_response();
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = to_bytes(resp.into_body())
                .await
                .expect("read error response body");
            (status, headers, body)
        }
    }
}

pub fn body_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).expect("body should be valid JSON")
}
