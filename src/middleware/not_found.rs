use actix_web::dev::ServiceResponse;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::Result;

use super::error_handler::{envelope, is_json};
use crate::utils::messages;

pub fn not_found<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    // A handler's own 404 (e.g. unknown post) already carries its message.
    if is_json(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    envelope(res, messages::ROUTE_DOES_NOT_EXIST, "NOT_FOUND_ERROR")
}
