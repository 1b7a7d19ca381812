use super::controller::{login_user, register_user};
use actix_web::web;

pub fn user_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register_user))
        .route("/login", web::post().to(login_user));
}
