use std::sync::Arc;

use log::{error, info};
use mongodb::Database;
use mongodb::bson::oid::ObjectId;

use crate::post::post_model::{
    AddCommentRequest, Comment, CreatePostRequest, Post, UpdatePostRequest,
};
use crate::post::post_store::{MongoPostStore, PostStore};
use crate::utils::error::{CustomError, StoreError};
use crate::utils::messages;
use crate::utils::validation::is_post_form_data_valid;

pub struct PostService {
    store: Arc<dyn PostStore>,
}

fn parse_post_id(id: &str) -> Result<ObjectId, CustomError> {
    ObjectId::parse_str(id)
        .map_err(|_| CustomError::ValidationError(messages::INVALID_POST_ID.into()))
}

/// Logs the store fault and replaces it with a fixed message.
fn store_failure(context: &'static str) -> impl FnOnce(StoreError) -> CustomError {
    move |e| {
        error!("{context}: {e}");
        CustomError::InternalServerError(context.into())
    }
}

impl PostService {
    pub fn new(db: &Database) -> Self {
        Self::with_store(Arc::new(MongoPostStore::new(db)))
    }

    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        PostService { store }
    }

    pub async fn get_all_posts(&self) -> Result<Vec<Post>, CustomError> {
        self.store
            .find_all()
            .await
            .map_err(store_failure(messages::FAILED_TO_GET_ALL_POSTS))
    }

    /// `Ok(None)` when no post has this id.
    pub async fn get_post_by_id(&self, id: &str) -> Result<Option<Post>, CustomError> {
        let object_id = parse_post_id(id)?;

        self.store
            .find_by_id(&object_id)
            .await
            .map_err(store_failure(messages::FAILED_TO_GET_POST_BY_ID))
    }

    pub async fn get_posts_by_user_name(&self, user_name: &str) -> Result<Vec<Post>, CustomError> {
        self.store
            .find_by_user_name(user_name)
            .await
            .map_err(store_failure(messages::FAILED_TO_GET_POSTS_BY_USER))
    }

    pub async fn create_post(&self, data: CreatePostRequest) -> Result<Post, CustomError> {
        let existing = self
            .store
            .find_by_user_and_title(&data.user_name, &data.title)
            .await
            .map_err(store_failure(messages::FAILED_TO_CREATE_POST))?;

        if existing.is_some() {
            return Err(CustomError::ConflictError(messages::POST_ALREADY_EXISTS.into()));
        }

        if !is_post_form_data_valid(&data) {
            return Err(CustomError::ValidationError(messages::INVALID_FORM_DATA.into()));
        }

        let post = Post::new(data);

        // The store repeats the uniqueness check atomically with the insert.
        match self.store.insert(&post).await {
            Ok(()) => {
                info!("Created post {} by {}", post.id, post.user_name);
                Ok(post)
            }
            Err(StoreError::Duplicate) => {
                Err(CustomError::ConflictError(messages::POST_ALREADY_EXISTS.into()))
            }
            Err(e) => Err(store_failure(messages::FAILED_TO_CREATE_POST)(e)),
        }
    }

    /// `Ok(None)` when no post has this id.
    pub async fn update_post(
        &self,
        id: &str,
        patch: UpdatePostRequest,
    ) -> Result<Option<Post>, CustomError> {
        let object_id = parse_post_id(id)?;

        match self.store.update(&object_id, &patch).await {
            Ok(updated) => Ok(updated),
            Err(StoreError::Duplicate) => {
                Err(CustomError::ConflictError(messages::POST_ALREADY_EXISTS.into()))
            }
            Err(e) => Err(store_failure(messages::FAILED_TO_UPDATE_POST)(e)),
        }
    }

    /// `true` if a post was removed, `false` if none matched.
    pub async fn delete_post(&self, id: &str) -> Result<bool, CustomError> {
        let object_id = parse_post_id(id)?;

        let deleted = self
            .store
            .delete(&object_id)
            .await
            .map_err(store_failure(messages::FAILED_TO_DELETE_POST))?;

        Ok(deleted > 0)
    }

    /// `Ok(None)` when no post has this id; nothing is written in that case.
    pub async fn add_comment(
        &self,
        id: &str,
        comment: AddCommentRequest,
    ) -> Result<Option<Post>, CustomError> {
        let object_id = parse_post_id(id)?;
        let comment = Comment::from(comment);

        self.store
            .push_comment(&object_id, &comment)
            .await
            .map_err(store_failure(messages::FAILED_TO_ADD_COMMENT))
    }
}
