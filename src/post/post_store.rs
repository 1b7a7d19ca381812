use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId, to_bson};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use tokio::sync::RwLock;

use crate::database::POSTS_COLLECTION;
use crate::post::post_model::{Comment, Post, UpdatePostRequest};
use crate::utils::error::StoreError;

/// Persistence port for posts.
///
/// `insert` and `update` must reject a write that would give two posts the
/// same `(user_name, title)` pair with [`StoreError::Duplicate`], atomically
/// with the write itself.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, StoreError>;

    async fn find_by_user_name(&self, user_name: &str) -> Result<Vec<Post>, StoreError>;

    async fn find_by_user_and_title(
        &self,
        user_name: &str,
        title: &str,
    ) -> Result<Option<Post>, StoreError>;

    async fn insert(&self, post: &Post) -> Result<(), StoreError>;

    /// Returns the post as it is after the update, or `None` if absent.
    async fn update(
        &self,
        id: &ObjectId,
        patch: &UpdatePostRequest,
    ) -> Result<Option<Post>, StoreError>;

    /// Returns the number of removed posts.
    async fn delete(&self, id: &ObjectId) -> Result<u64, StoreError>;

    /// Appends to the comment list; `None` if the post is absent.
    async fn push_comment(
        &self,
        id: &ObjectId,
        comment: &Comment,
    ) -> Result<Option<Post>, StoreError>;
}

pub struct MongoPostStore {
    collection: Collection<Post>,
}

impl MongoPostStore {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Post>(POSTS_COLLECTION);
        MongoPostStore { collection }
    }

    fn set_document(patch: &UpdatePostRequest) -> Result<Document, StoreError> {
        let mut set = match to_bson(patch)? {
            mongodb::bson::Bson::Document(fields) => fields,
            _ => Document::new(),
        };
        set.insert("updatedAt", to_bson(&Utc::now())?);
        Ok(set)
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Vec<Post>, StoreError> {
        let cursor = self.collection.find(doc! { "userName": user_name }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_user_and_title(
        &self,
        user_name: &str,
        title: &str,
    ) -> Result<Option<Post>, StoreError> {
        Ok(self
            .collection
            .find_one(doc! { "userName": user_name, "title": title })
            .await?)
    }

    async fn insert(&self, post: &Post) -> Result<(), StoreError> {
        self.collection.insert_one(post).await?;
        Ok(())
    }

    async fn update(
        &self,
        id: &ObjectId,
        patch: &UpdatePostRequest,
    ) -> Result<Option<Post>, StoreError> {
        let set = Self::set_document(patch)?;

        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: &ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count)
    }

    async fn push_comment(
        &self,
        id: &ObjectId,
        comment: &Comment,
    ) -> Result<Option<Post>, StoreError> {
        let update = doc! {
            "$push": { "comments": to_bson(comment)? },
            "$set": { "updatedAt": to_bson(&Utc::now())? },
        };

        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": *id }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }
}

/// Insertion-ordered store kept in process memory.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn collides(posts: &[Post], id: &ObjectId, user_name: &str, title: &str) -> bool {
    posts
        .iter()
        .any(|p| p.id != *id && p.user_name == user_name && p.title == title)
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .filter(|p| p.user_name == user_name)
            .cloned()
            .collect())
    }

    async fn find_by_user_and_title(
        &self,
        user_name: &str,
        title: &str,
    ) -> Result<Option<Post>, StoreError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|p| p.user_name == user_name && p.title == title)
            .cloned())
    }

    async fn insert(&self, post: &Post) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        if collides(&posts, &post.id, &post.user_name, &post.title) {
            return Err(StoreError::Duplicate);
        }
        posts.push(post.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &ObjectId,
        patch: &UpdatePostRequest,
    ) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;
        let Some(index) = posts.iter().position(|p| p.id == *id) else {
            return Ok(None);
        };

        let mut updated = posts[index].clone();
        patch.apply_to(&mut updated);
        if collides(&posts, id, &updated.user_name, &updated.title) {
            return Err(StoreError::Duplicate);
        }

        posts[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &ObjectId) -> Result<u64, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != *id);
        Ok((before - posts.len()) as u64)
    }

    async fn push_comment(
        &self,
        id: &ObjectId,
        comment: &Comment,
    ) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;
        Ok(posts.iter_mut().find(|p| p.id == *id).map(|post| {
            post.comments.push(comment.clone());
            post.updated_at = Utc::now();
            post.clone()
        }))
    }
}
