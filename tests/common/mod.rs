#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlers;
use actix_web::{App, web};
use serde_json::Value;

use book_review_backend::config::AppConfig;
use book_review_backend::middleware::error_handler::handle_error;
use book_review_backend::middleware::not_found::not_found;
use book_review_backend::post::post_service::PostService;
use book_review_backend::post::post_store::InMemoryPostStore;
use book_review_backend::router::routes;
use book_review_backend::user::service::UserService;
use book_review_backend::user::store::InMemoryUserStore;

pub const JWT_SECRET: &str = "integration-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        mongodb_uri: String::new(),
        database_name: "book_reviews_test".into(),
        jwt_secret: JWT_SECRET.into(),
        token_ttl_hours: 1,
    }
}

/// The production app wired to in-memory stores.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = test_config();
    let post_service = PostService::with_store(Arc::new(InMemoryPostStore::new()));
    let user_service = UserService::with_store(Arc::new(InMemoryUserStore::new()), &config);

    App::new()
        .app_data(web::Data::new(config))
        .app_data(web::Data::new(post_service))
        .app_data(web::Data::new(user_service))
        .configure(routes)
        .wrap(
            ErrorHandlers::new()
                .handler(StatusCode::NOT_FOUND, not_found)
                .default_handler(handle_error),
        )
}

pub fn object_id(value: &Value) -> String {
    value["_id"]
        .as_str()
        .expect("record carries a hex `_id` string")
        .to_string()
}
