use super::post_controller::{
    add_comment, create_post, delete_post, get_all_posts, get_post, get_posts_by_user_name,
    update_post,
};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(get_all_posts))
            .route("", web::post().to(create_post))
            .route("/user/{user_name}", web::get().to(get_posts_by_user_name))
            .route("/{id}", web::get().to(get_post))
            .route("/{id}", web::put().to(update_post))
            .route("/{id}", web::delete().to(delete_post))
            .route("/{id}/comments", web::post().to(add_comment)),
    );
}
