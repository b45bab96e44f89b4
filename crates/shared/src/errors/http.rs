use crate::errors::{errors::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        AppErrorHttp(err)
    }
}

impl AppErrorHttp {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            ServiceError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServiceError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation failed: {}", errors.join(", ")),
            ),
            ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ServiceError::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Storage temporarily unavailable".to_string(),
            ),
            ServiceError::Cancelled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Request cancelled".to_string(),
            ),
            ServiceError::Repo { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            ServiceError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!("❌ Request failed: {:?}", self.0);
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message,
        });

        (status, body).into_response()
    }
}
