mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::middleware::require_user::AUTH_TOKEN_HEADER;
use serde_json::json;

#[actix_web::test]
async fn health_endpoint_answers_ok() {
    let app = common::init_app(common::test_state()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[actix_web::test]
async fn registration_creates_a_regular_account() {
    let app = common::init_app(common::test_state()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "name": "Nina",
            "email": "nina@example.com",
            "password": "corcovado",
        }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::CREATED);
    let json = common::body_json(&body);
    assert_eq!(json["message"], "User created successfully.");
    assert_eq!(json["data"]["name"], "Nina");
    assert_eq!(json["data"]["email"], "nina@example.com");
    assert_eq!(json["data"]["isAdmin"], false);
    let id = json["data"]["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    // never echo credentials back
    assert!(json["data"].get("password").is_none());
    assert!(json["data"].get("passwordHash").is_none());
}

#[actix_web::test]
async fn registration_ignores_an_admin_flag_in_the_body() {
    let app = common::init_app(common::test_state()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "name": "Sneaky",
            "email": "sneaky@example.com",
            "password": "corcovado",
            "isAdmin": true,
        }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(common::body_json(&body)["data"]["isAdmin"], false);
}

#[actix_web::test]
async fn registration_rejects_a_duplicate_email() {
    let state = common::test_state();
    common::seed_user(&state, "Nina", "nina@example.com", "corcovado", false);
    let app = common::init_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "name": "Other Nina",
            "email": "nina@example.com",
            "password": "different",
        }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(&body),
        json!({ "message": "User already exists." })
    );
}

#[actix_web::test]
async fn registration_validates_each_field() {
    let app = common::init_app(common::test_state()).await;

    let cases = [
        (
            json!({ "email": "nina@example.com", "password": "corcovado" }),
            "Name is required.",
        ),
        (
            json!({ "name": "Nina", "email": "not-an-email", "password": "corcovado" }),
            "A valid email is required.",
        ),
        (
            json!({ "name": "Nina", "email": "nina@example.com", "password": "short" }),
            "Password must be at least 6 characters.",
        ),
    ];

    for (payload, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(&payload)
            .to_request();
        let (status, _, body) = common::call_capture(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(
            common::body_json(&body),
            json!({ "message": message }),
            "payload {payload}"
        );
    }
}

#[actix_web::test]
async fn registration_rejects_a_malformed_body() {
    let app = common::init_app(common::test_state()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "Nina", "#)
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = common::body_json(&body)["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.starts_with("Invalid JSON"), "got {message:?}");
}

#[actix_web::test]
async fn login_roundtrip_yields_a_working_token() {
    let app = common::init_app(common::test_state()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "name": "Nina",
            "email": "nina@example.com",
            "password": "corcovado",
        }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = common::body_json(&body)["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "email": "nina@example.com",
            "password": "corcovado",
        }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let json = common::body_json(&body);
    assert_eq!(json["message"], "Signed in successfully.");
    let token = json["data"].as_str().unwrap().to_string();

    // the freshly minted token opens the id-addressed route
    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{id}"))
        .insert_header((AUTH_TOKEN_HEADER, token.as_str()))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::body_json(&body)["data"]["id"], id);
}

#[actix_web::test]
async fn login_rejects_unknown_email_and_wrong_password_alike() {
    let state = common::test_state();
    common::seed_user(&state, "Nina", "nina@example.com", "corcovado", false);
    let app = common::init_app(state).await;

    let cases = [
        json!({ "email": "nobody@example.com", "password": "corcovado" }),
        json!({ "email": "nina@example.com", "password": "wrong-password" }),
    ];

    for payload in cases {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(&payload)
            .to_request();
        let (status, _, body) = common::call_capture(&app, req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "payload {payload}");
        assert_eq!(
            common::body_json(&body),
            json!({ "message": "Invalid email or password." }),
            "payload {payload}"
        );
    }
}

#[actix_web::test]
async fn login_requires_both_fields() {
    let app = common::init_app(common::test_state()).await;

    let cases = [
        (
            json!({ "password": "corcovado" }),
            "Email cannot be empty.",
        ),
        (
            json!({ "email": "nina@example.com" }),
            "Password cannot be empty.",
        ),
    ];

    for (payload, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(&payload)
            .to_request();
        let (status, _, body) = common::call_capture(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(
            common::body_json(&body),
            json!({ "message": message }),
            "payload {payload}"
        );
    }
}

#[actix_web::test]
async fn profile_update_persists() {
    let state = common::test_state();
    let user = common::seed_user(&state, "Nina", "nina@example.com", "corcovado", false);
    let token = common::mint_test_token(user.id.as_str(), false, &state.security);
    let app = common::init_app(state).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", user.id))
        .insert_header((AUTH_TOKEN_HEADER, token.as_str()))
        .set_json(json!({ "name": "Nina Simone" }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let json = common::body_json(&body);
    assert_eq!(json["message"], "Profile updated successfully.");
    assert_eq!(json["data"]["name"], "Nina Simone");
    // untouched fields survive a partial update
    assert_eq!(json["data"]["email"], "nina@example.com");

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", user.id))
        .insert_header((AUTH_TOKEN_HEADER, token.as_str()))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::body_json(&body)["data"]["name"], "Nina Simone");
}

#[actix_web::test]
async fn profile_update_rejects_an_empty_name() {
    let state = common::test_state();
    let user = common::seed_user(&state, "Nina", "nina@example.com", "corcovado", false);
    let token = common::mint_test_token(user.id.as_str(), false, &state.security);
    let app = common::init_app(state).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", user.id))
        .insert_header((AUTH_TOKEN_HEADER, token.as_str()))
        .set_json(json!({ "name": "  " }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(&body),
        json!({ "message": "Name is required." })
    );
}

#[actix_web::test]
async fn reads_and_updates_of_an_unknown_id_return_404() {
    let state = common::test_state();
    let user = common::seed_user(&state, "Nina", "nina@example.com", "corcovado", false);
    let token = common::mint_test_token(user.id.as_str(), false, &state.security);
    let app = common::init_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/users/ffffffffffffffffffffffff")
        .insert_header((AUTH_TOKEN_HEADER, token.as_str()))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        common::body_json(&body),
        json!({ "message": "User not found." })
    );

    let req = test::TestRequest::put()
        .uri("/api/users/ffffffffffffffffffffffff")
        .insert_header((AUTH_TOKEN_HEADER, token.as_str()))
        .set_json(json!({ "name": "Ghost" }))
        .to_request();
    let (status, _, body) = common::call_capture(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        common::body_json(&body),
        json!({ "message": "User not found." })
    );
}
