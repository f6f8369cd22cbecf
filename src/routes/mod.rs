use actix_web::HttpResponse;
use log::error;
use serde_json::json;
use validator::ValidationErrors;

use crate::services::ServiceError;

pub mod v1;
pub mod v2;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maps a service error onto the HTTP surface. Internal faults are logged
/// with the caller's context and answered with an empty 500.
pub(crate) fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({"error": "Customer not found"}))
        }
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({"error": message}))
        }
        ServiceError::InvalidSortField(field) => HttpResponse::BadRequest().json(json!({
            "error": format!("Invalid sort field: {field}")
        })),
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(json!({"error": message}))
        }
        ServiceError::Internal(message) => {
            error!("{context}: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Per-field validation failure body, produced before any persistence call.
pub(crate) fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "error": "Validation failed",
        "fields": errors,
    }))
}
