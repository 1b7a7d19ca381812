//! Fixed human-readable messages shared by the services and controllers.

pub const FAILED_TO_GET_ALL_POSTS: &str = "Failed to get all posts";
pub const FAILED_TO_GET_POST_BY_ID: &str = "Failed to get post by id";
pub const FAILED_TO_GET_POSTS_BY_USER: &str = "Failed to get posts by user";
pub const FAILED_TO_CREATE_POST: &str = "Failed to create post";
pub const FAILED_TO_UPDATE_POST: &str = "Failed to update post";
pub const FAILED_TO_DELETE_POST: &str = "Failed to delete post";
pub const FAILED_TO_ADD_COMMENT: &str = "Failed to add comment";
pub const POST_ALREADY_EXISTS: &str = "Post already exists";
pub const POST_NOT_FOUND: &str = "Post not found";
pub const INVALID_FORM_DATA: &str = "Invalid form data";
pub const INVALID_POST_ID: &str = "Invalid post id";

pub const USER_ALREADY_EXISTS: &str = "User already exists";
pub const MISSING_REQUIRED_FIELDS: &str = "Name, email and password are required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INVALID_USER_ID: &str = "Invalid user id";
pub const FAILED_TO_REGISTER_USER: &str = "Failed to register user";
pub const FAILED_TO_LOGIN: &str = "Failed to login";
pub const FAILED_TO_GET_USER: &str = "Failed to get user";
pub const TOKEN_GENERATION_FAILED: &str = "Token generation failed";

pub const ROUTE_DOES_NOT_EXIST: &str = "Route does not exist";
