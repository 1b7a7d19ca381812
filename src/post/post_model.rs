use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub authors: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    pub rating: f64,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A review post. `user_name` is the author's name, not a user id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_name: String,
    pub book: Book,
    pub title: String,
    pub review: Review,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// New post with no comments.
    pub fn new(data: CreatePostRequest) -> Self {
        let now = Utc::now();
        Post {
            id: ObjectId::new(),
            user_name: data.user_name,
            book: data.book,
            title: data.title,
            review: Review {
                rating: data.rating,
                description: data.description,
            },
            comments: Vec::new(),
            image: data.image,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Wire shape of a post: `_id` is the plain hex string clients send back
/// in `/posts/{id}`, the same shape `UserResponse` uses.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_name: String,
    pub book: Book,
    pub title: String,
    pub review: Review,
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: post.id.to_hex(),
            user_name: post.user_name,
            book: post.book,
            title: post.title,
            review: post.review,
            comments: post.comments,
            image: post.image,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_name: String,
    pub book: Book,
    pub title: String,
    /// Range-checked by the form validator, not by decoding.
    pub rating: f64,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial update; every field that is present replaces the stored one.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UpdatePostRequest {
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(user_name) = &self.user_name {
            post.user_name.clone_from(user_name);
        }
        if let Some(book) = &self.book {
            post.book = book.clone();
        }
        if let Some(title) = &self.title {
            post.title.clone_from(title);
        }
        if let Some(review) = &self.review {
            post.review = review.clone();
        }
        if let Some(image) = &self.image {
            post.image = Some(image.clone());
        }
        post.updated_at = Utc::now();
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    #[serde(default)]
    pub user_name: Option<String>,
    pub text: String,
}

impl From<AddCommentRequest> for Comment {
    fn from(request: AddCommentRequest) -> Self {
        Comment {
            user_name: request.user_name,
            text: request.text,
            created_at: Utc::now(),
        }
    }
}
