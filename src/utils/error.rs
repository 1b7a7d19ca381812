use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use mongodb::error::{ErrorKind, WriteFailure};
use serde_json::json;
use thiserror::Error;

use crate::utils::helpers::service_name;

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Unauthorized: {0}")]
    UnauthorizedError(String),

    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Conflict: {0}")]
    ConflictError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),
}

impl CustomError {
    /// Machine-readable code carried in the `error` field of the envelope.
    pub fn code(&self) -> &'static str {
        match self {
            CustomError::UnauthorizedError(..) => "UNAUTHORIZED_ERROR",
            CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
            CustomError::ConflictError(..) => "CONFLICT_ERROR",
            CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
            CustomError::ValidationError(..) => "VALIDATION_ERROR",
        }
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::UnauthorizedError(..) => StatusCode::UNAUTHORIZED,
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::ConflictError(..) => StatusCode::CONFLICT,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": self.code(),
            "service": service_name(),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}

/// Failure reported by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("duplicate key")]
    Duplicate,

    #[error("store backend failed: {0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                StoreError::Duplicate
            }
            ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
                StoreError::Duplicate
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
