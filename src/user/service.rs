use std::sync::Arc;

use log::{error, info};
use mongodb::Database;
use mongodb::bson::oid::ObjectId;

use crate::config::AppConfig;
use crate::middleware::auth::create_token;
use crate::user::model::{LoginRequest, RegisterRequest, User, UserResponse};
use crate::user::store::{MongoUserStore, UserStore};
use crate::utils::error::{CustomError, StoreError};
use crate::utils::hashing;
use crate::utils::messages;
use crate::utils::validation::{is_blank, is_valid_email};

pub struct UserService {
    store: Arc<dyn UserStore>,
    jwt_secret: String,
    token_ttl_hours: i64,
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserResponse,
}

fn internal(context: &'static str) -> impl FnOnce(StoreError) -> CustomError {
    move |e| {
        error!("{context}: {e}");
        CustomError::InternalServerError(context.into())
    }
}

impl UserService {
    pub fn new(db: &Database, config: &AppConfig) -> Self {
        Self::with_store(Arc::new(MongoUserStore::new(db)), config)
    }

    pub fn with_store(store: Arc<dyn UserStore>, config: &AppConfig) -> Self {
        UserService {
            store,
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_hours: config.token_ttl_hours,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, CustomError> {
        let name = request.name.trim().to_string();
        let email = request.email.trim().to_string();

        if is_blank(&name) || is_blank(&email) || request.password.is_empty() {
            return Err(CustomError::ValidationError(
                messages::MISSING_REQUIRED_FIELDS.into(),
            ));
        }

        if !is_valid_email(&email) {
            return Err(CustomError::ValidationError(messages::INVALID_EMAIL.into()));
        }

        let existing = self
            .store
            .find_by_email(&email)
            .await
            .map_err(internal(messages::FAILED_TO_REGISTER_USER))?;
        if existing.is_some() {
            return Err(CustomError::ConflictError(messages::USER_ALREADY_EXISTS.into()));
        }

        let hashed_password = hashing::hash_password(&request.password).map_err(|e| {
            error!("Failed to hash password: {e}");
            CustomError::InternalServerError(messages::FAILED_TO_REGISTER_USER.into())
        })?;

        let user = User::new(name, email, hashed_password);

        match self.store.insert(&user).await {
            Ok(()) => {
                info!("Registered user {}", user.id);
                Ok(UserResponse::from(&user))
            }
            Err(StoreError::Duplicate) => {
                Err(CustomError::ConflictError(messages::USER_ALREADY_EXISTS.into()))
            }
            Err(e) => Err(internal(messages::FAILED_TO_REGISTER_USER)(e)),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, CustomError> {
        let user = self
            .store
            .find_by_email(request.email.trim())
            .await
            .map_err(internal(messages::FAILED_TO_LOGIN))?
            .ok_or_else(|| CustomError::UnauthorizedError(messages::INVALID_CREDENTIALS.into()))?;

        let matches = hashing::verify_password(&request.password, &user.password).map_err(|e| {
            error!("Failed to verify password for {}: {e}", user.id);
            CustomError::UnauthorizedError(messages::INVALID_CREDENTIALS.into())
        })?;
        if !matches {
            return Err(CustomError::UnauthorizedError(
                messages::INVALID_CREDENTIALS.into(),
            ));
        }

        let token = create_token(&user.id.to_hex(), &self.jwt_secret, self.token_ttl_hours)?;

        Ok(LoginOutcome {
            token,
            user: UserResponse::from(&user),
        })
    }

    /// `Ok(None)` when no user has this id.
    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, CustomError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| CustomError::BadRequestError(messages::INVALID_USER_ID.into()))?;

        self.store
            .find_by_id(&object_id)
            .await
            .map_err(internal(messages::FAILED_TO_GET_USER))
    }
}
