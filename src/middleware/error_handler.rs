use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result};
use serde_json::json;

use crate::utils::helpers::service_name;

/// Responses produced by `CustomError` are already JSON envelopes.
pub fn is_json<B>(res: &ServiceResponse<B>) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

pub fn envelope<B>(
    res: ServiceResponse<B>,
    message: &str,
    error: &str,
) -> Result<ErrorHandlerResponse<B>> {
    let status_code = res.status();
    let new_response = HttpResponse::build(status_code).json(json!({
        "success": false,
        "message": message,
        "httpStatusCode": status_code.as_u16(),
        "error": error,
        "service": service_name(),
    }));

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

/// Rewrites framework-generated error responses into the JSON envelope.
pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if is_json(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status_code = res.status();
    let error_message = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| status_code.canonical_reason().unwrap_or("Unknown error").to_string());
    let error_type = match status_code {
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED_ERROR",
        status if status.is_client_error() => "BAD_REQUEST_ERROR",
        _ => "INTERNAL_SERVER_ERROR",
    };

    envelope(res, &error_message, error_type)
}
