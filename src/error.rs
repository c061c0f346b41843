use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Client-caused failures of directory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound(String),
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },
    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::NotFound(_) => StatusCode::NOT_FOUND,
            ActivityError::AlreadyRegistered { .. } | ActivityError::NotRegistered { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
