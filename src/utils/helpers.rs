use std::env;

use actix_web::http::StatusCode;
use serde_json::{Value, json};

/// Name reported in the `service` field of every response envelope.
pub fn service_name() -> String {
    env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Builds the success envelope and merges `payload` fields into it.
pub fn success_body(status: StatusCode, message: &str, payload: Value) -> Value {
    let mut body = json!({
        "success": true,
        "message": message,
        "httpStatusCode": status.as_u16(),
        "service": service_name(),
    });

    if let (Some(target), Value::Object(extra)) = (body.as_object_mut(), payload) {
        target.extend(extra);
    }

    body
}
