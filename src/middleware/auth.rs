use actix_web::{Error, HttpMessage, HttpRequest, dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::utils::error::CustomError;
use crate::utils::messages;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

pub fn create_token(user_id: &str, secret: &str, ttl_hours: i64) -> Result<String, CustomError> {
    let expiration = (Utc::now() + Duration::hours(ttl_hours)).timestamp().max(0) as usize;

    let claims = Claims {
        id: user_id.to_owned(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        warn!("Failed to sign token: {e}");
        CustomError::InternalServerError(messages::TOKEN_GENERATION_FAILED.into())
    })
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, CustomError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| CustomError::UnauthorizedError("Invalid token".into()))
}

/// Bearer middleware validator; stores the decoded [`Claims`] in the request.
pub async fn verify_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let Some(config) = req.app_data::<web::Data<AppConfig>>() else {
        warn!("AppConfig missing from app data, rejecting token");
        return Err((
            CustomError::InternalServerError("Auth is not configured".into()).into(),
            req,
        ));
    };

    match decode_token(credentials.token(), &config.jwt_secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// Get claims from request extensions (use after auth middleware)
pub fn claims_from_request(req: &HttpRequest) -> Option<Claims> {
    req.extensions().get::<Claims>().cloned()
}
