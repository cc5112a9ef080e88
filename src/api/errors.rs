use axum::{http::StatusCode, response::IntoResponse};
use crate::errors::FuzzError;

impl IntoResponse for FuzzError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            FuzzError::MissingAuthority => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error during fuzzing: {}", self),
            ),
        };

        (status, message).into_response()
    }
}
