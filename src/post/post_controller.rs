use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::post::post_model::{
    AddCommentRequest, CreatePostRequest, Post, PostResponse, UpdatePostRequest,
};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::success_body;
use crate::utils::messages;

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(PostResponse::from).collect()
}

/// GET /posts
pub async fn get_all_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let posts = to_responses(post_service.get_all_posts().await?);

    Ok(HttpResponse::Ok().json(success_body(
        StatusCode::OK,
        "Posts fetched successfully",
        json!({ "count": posts.len(), "posts": posts }),
    )))
}

/// GET /posts/{id}
pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let post = post_service.get_post_by_id(&post_id).await?;

    match post {
        Some(p) => Ok(HttpResponse::Ok().json(success_body(
            StatusCode::OK,
            "Post fetched successfully",
            json!({ "post": PostResponse::from(p) }),
        ))),
        None => Err(CustomError::NotFoundError(messages::POST_NOT_FOUND.into())),
    }
}

/// GET /posts/user/{user_name}
pub async fn get_posts_by_user_name(
    user_name: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let posts = to_responses(
        post_service
            .get_posts_by_user_name(&user_name.into_inner())
            .await?,
    );

    Ok(HttpResponse::Ok().json(success_body(
        StatusCode::OK,
        "Posts fetched successfully",
        json!({ "count": posts.len(), "posts": posts }),
    )))
}

/// POST /posts
pub async fn create_post(
    post_service: web::Data<PostService>,
    post: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let inserted_post = post_service.create_post(post.into_inner()).await?;

    Ok(HttpResponse::Created().json(success_body(
        StatusCode::CREATED,
        "Post created successfully",
        json!({ "post": PostResponse::from(inserted_post) }),
    )))
}

/// PUT /posts/{id}
pub async fn update_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    patch: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let updated = post_service
        .update_post(&post_id.into_inner(), patch.into_inner())
        .await?
        .ok_or_else(|| CustomError::NotFoundError(messages::POST_NOT_FOUND.into()))?;

    Ok(HttpResponse::Ok().json(success_body(
        StatusCode::OK,
        "Post updated successfully",
        json!({ "post": PostResponse::from(updated) }),
    )))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let deleted = post_service.delete_post(&post_id).await?;

    if deleted {
        Ok(HttpResponse::Ok().json(success_body(
            StatusCode::OK,
            "Post deleted successfully",
            json!({}),
        )))
    } else {
        Err(CustomError::NotFoundError(messages::POST_NOT_FOUND.into()))
    }
}

/// POST /posts/{id}/comments
pub async fn add_comment(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    comment: web::Json<AddCommentRequest>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service
        .add_comment(&post_id.into_inner(), comment.into_inner())
        .await?
        .ok_or_else(|| CustomError::NotFoundError(messages::POST_NOT_FOUND.into()))?;

    Ok(HttpResponse::Created().json(success_body(
        StatusCode::CREATED,
        "Comment added successfully",
        json!({ "post": PostResponse::from(post) }),
    )))
}
