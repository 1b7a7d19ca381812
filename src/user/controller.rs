use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::user::model::{LoginRequest, RegisterRequest};
use crate::user::service::UserService;
use crate::utils::error::CustomError;
use crate::utils::helpers::success_body;

/// POST /register
pub async fn register_user(
    user_service: web::Data<UserService>,
    user_info: web::Json<RegisterRequest>,
) -> Result<HttpResponse, CustomError> {
    let user = user_service.register(user_info.into_inner()).await?;

    Ok(HttpResponse::Created().json(success_body(
        StatusCode::CREATED,
        "User created successfully",
        json!({ "user": user }),
    )))
}

/// POST /login
pub async fn login_user(
    user_service: web::Data<UserService>,
    login_info: web::Json<LoginRequest>,
) -> Result<HttpResponse, CustomError> {
    let outcome = user_service.login(login_info.into_inner()).await?;

    Ok(HttpResponse::Ok().json(success_body(
        StatusCode::OK,
        "Login successful",
        json!({ "token": outcome.token, "user": outcome.user }),
    )))
}
