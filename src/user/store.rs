use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use tokio::sync::RwLock;

use crate::database::USERS_COLLECTION;
use crate::user::model::User;
use crate::utils::error::StoreError;

/// Persistence port for users. `insert` rejects a second user with the same
/// email with [`StoreError::Duplicate`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, StoreError>;

    async fn insert(&self, user: &User) -> Result<(), StoreError>;
}

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<User>(USERS_COLLECTION);
        MongoUserStore { collection }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.collection.insert_one(user).await?;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == *id).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate);
        }
        users.push(user.clone());
        Ok(())
    }
}
