pub mod db;

pub use db::{POSTS_COLLECTION, USERS_COLLECTION, connect_to_mongo, ensure_indexes};
