use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pdf_chat::{ErrorResponse, ServiceError};

/// The one place failures become payloads. Every error is reported as
/// `200 OK` with an `{"error": ...}` body; clients tell success from failure
/// by the shape of the body, not by status code.
pub fn error_payload(err: &ServiceError) -> (StatusCode, ErrorResponse) {
    (
        StatusCode::OK,
        ErrorResponse {
            error: err.to_string(),
        },
    )
}

#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("Request failed: {:?}", self.0);
        let (status, body) = error_payload(&self.0);
        (status, Json(body)).into_response()
    }
}
