use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown notification type: {0}")]
    UnknownType(String),

    #[error("email delivery failed: {0}")]
    Delivery(String),

    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}

impl IntoResponse for NotifyError {
    fn into_response(self) -> Response {
        let status = match self {
            NotifyError::MissingField(_) | NotifyError::UnknownType(_) => StatusCode::BAD_REQUEST,
            NotifyError::Delivery(_) | NotifyError::MissingEnv(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
