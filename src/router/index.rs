use crate::post::post_index::post_routes;
use crate::profile::index::profile_routes;
use crate::user::index::user_routes;
use crate::utils::error::CustomError;
use crate::utils::helpers::success_body;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(success_body(
        StatusCode::OK,
        "Welcome to the book review API",
        json!({}),
    ))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        CustomError::BadRequestError(err.to_string()).into()
    }));
    cfg.service(default);
    cfg.configure(user_routes);
    cfg.configure(post_routes);
    cfg.configure(profile_routes);
}
