use crate::errors::{ApiError, ServiceError};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Json as JsonExtract, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::Validate;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Unwraps a JSON body, reporting any extraction failure as 400.
pub fn json_body<T>(payload: Result<JsonExtract<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|JsonExtract(value)| value)
        .map_err(|rejection| ApiError::BadRequest {
            message: format!("Invalid request body: {}", rejection.body_text()),
        })
}

/// Unwraps a path parameter, reporting a parse failure as 400.
pub fn path_param<T>(param: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    param
        .map(|Path(value)| value)
        .map_err(|rejection| ApiError::BadRequest {
            message: format!("Invalid path parameter: {}", rejection.body_text()),
        })
}
