mod common;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::test;
use serde_json::{Value, json};

use book_review_backend::middleware::auth::{create_token, decode_token};
use common::{JWT_SECRET, test_app};

fn alice() -> Value {
    json!({ "name": "Alice", "email": "alice@example.com", "password": "correct horse" })
}

#[actix_web::test]
async fn register_and_login() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post().uri("/register").set_json(alice()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let registered: Value = test::read_body_json(resp).await;
    assert_eq!(registered["user"]["email"], "alice@example.com");
    assert!(registered["user"]["_id"].is_string());
    assert!(registered["user"].get("id").is_none());
    assert!(registered["user"].get("password").is_none());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "alice@example.com", "password": "correct horse" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    let token = body["token"].as_str().expect("token");
    let claims = decode_token(token, JWT_SECRET).expect("valid token");
    assert_eq!(claims.id, registered["user"]["_id"].as_str().expect("id"));
}

#[actix_web::test]
async fn register_rejects_duplicate_and_malformed_email() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post().uri("/register").set_json(alice()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post().uri("/register").set_json(alice()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let mut bad = alice();
    bad["email"] = json!("alice-at-example");
    let req = test::TestRequest::post().uri("/register").set_json(bad).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Validation Error: Invalid email");
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = test::init_service(test_app()).await;
    let req = test::TestRequest::post().uri("/register").set_json(alice()).to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "alice@example.com", "password": "battery staple" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED_ERROR");
}

async fn login_token(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
) -> (String, String) {
    let req = test::TestRequest::post().uri("/register").set_json(alice()).to_request();
    let registered: Value = test::call_and_read_body_json(app, req).await;
    let id = registered["user"]["_id"].as_str().expect("id").to_string();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "alice@example.com", "password": "correct horse" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;
    (id, body["token"].as_str().expect("token").to_string())
}

#[actix_web::test]
async fn profile_shows_current_user() {
    let app = test::init_service(test_app()).await;
    let (_, token) = login_token(&app).await;

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    let profile = &body["profile"];
    assert_eq!(profile["userName"], "Alice");
    assert_eq!(profile["email"], "alice@example.com");
    assert_eq!(profile["profileImage"], "/assets/image.jpg");
    assert_eq!(profile["createdAt"].as_str().map(str::len), Some(10));
}

#[actix_web::test]
async fn profile_submit_redirects_to_edit_page() {
    let app = test::init_service(test_app()).await;
    let (id, token) = login_token(&app).await;

    let req = test::TestRequest::post()
        .uri("/profile")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header");
    assert_eq!(location, format!("/edit-profile/{id}"));
}

#[actix_web::test]
async fn profile_of_unknown_user_renders_blank_fields() {
    let app = test::init_service(test_app()).await;
    let token = create_token("65f0c0ffee0000000000beef", JWT_SECRET, 1).expect("token");

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["profile"]["userName"], "");
    assert_eq!(body["profile"]["email"], "");
    assert_eq!(body["profile"]["profileImage"], "/assets/image.jpg");
}

#[actix_web::test]
async fn profile_requires_a_valid_token() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get().uri("/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED_ERROR");
}
