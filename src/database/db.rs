use log::{error, info};
use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use crate::config::AppConfig;

pub const USERS_COLLECTION: &str = "users";
pub const POSTS_COLLECTION: &str = "posts";

pub async fn connect_to_mongo(config: &AppConfig) -> Result<Client, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    client_options.app_name = Some("book_review_backend".to_string());

    let client = Client::with_options(client_options)?;

    // Ping the server to see if you can connect to the cluster
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .inspect_err(|e| error!("Failed to reach MongoDB: {e}"))?;

    info!("Connected successfully to MongoDB");

    Ok(client)
}

/// Unique indexes backing the email and (author, title) invariants.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let unique = || IndexOptions::builder().unique(true).build();

    db.collection::<Document>(USERS_COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    db.collection::<Document>(POSTS_COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "userName": 1, "title": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    info!("Indexes ensured on {USERS_COLLECTION} and {POSTS_COLLECTION}");

    Ok(())
}
