//! REST backend for a social book-review site: users register and log in,
//! write reviews of books as posts, and comment on each other's posts.

pub mod config;
pub mod database;
pub mod middleware;
pub mod post;
pub mod profile;
pub mod router;
pub mod user;
pub mod utils;
