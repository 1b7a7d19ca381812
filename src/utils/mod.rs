pub mod error;
pub mod hashing;
pub mod helpers;
pub mod messages;
pub mod validation;
