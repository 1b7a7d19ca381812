use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use log::debug;
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::middleware::auth::claims_from_request;
use crate::profile::view::{ProfileData, edit_profile_location};
use crate::user::service::UserService;
use crate::utils::error::CustomError;
use crate::utils::helpers::success_body;
use crate::utils::messages;

fn current_user_id(req: &HttpRequest) -> Result<String, CustomError> {
    claims_from_request(req)
        .map(|claims| claims.id)
        .ok_or_else(|| CustomError::UnauthorizedError("Not authenticated".into()))
}

/// GET /profile
pub async fn show_profile(
    req: HttpRequest,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, CustomError> {
    let user_id = current_user_id(&req)?;
    let user = user_service.get_user_by_id(&user_id).await?;

    let profile = ProfileData::load(user.as_ref());

    Ok(HttpResponse::Ok().json(success_body(
        StatusCode::OK,
        "Profile fetched successfully",
        json!({ "profile": profile }),
    )))
}

/// POST /profile
pub async fn edit_profile(req: HttpRequest) -> Result<HttpResponse, CustomError> {
    let user_id = current_user_id(&req)?;
    let object_id = ObjectId::parse_str(&user_id)
        .map_err(|_| CustomError::BadRequestError(messages::INVALID_USER_ID.into()))?;

    debug!("Edit profile of user {user_id}");
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, edit_profile_location(&object_id)))
        .finish())
}
