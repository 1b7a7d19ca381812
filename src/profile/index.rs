use super::controller::{edit_profile, show_profile};
use crate::middleware::auth::verify_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub fn profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .wrap(HttpAuthentication::bearer(verify_token))
            .route("", web::get().to(show_profile))
            .route("", web::post().to(edit_profile)),
    );
}
