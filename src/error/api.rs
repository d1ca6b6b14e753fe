use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;
use trivia_schema::ErrorResponse;

use super::trivia::TriviaError;

/// The three error conditions the API ever reports.
///
/// `debug_message` is logged when the response is built and never sent to the client.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Bad request")]
    BadRequest { debug_message: Option<String> },

    #[error("Resource not found")]
    NotFound { debug_message: Option<String> },

    #[error("Unprocessable entity")]
    Unprocessable { debug_message: Option<String> },
}

impl ApiError {
    pub fn bad_request(debug_message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            debug_message: Some(debug_message.into()),
        }
    }

    pub fn not_found(debug_message: impl Into<String>) -> Self {
        ApiError::NotFound {
            debug_message: Some(debug_message.into()),
        }
    }

    pub fn unprocessable(debug_message: impl Into<String>) -> Self {
        ApiError::Unprocessable {
            debug_message: Some(debug_message.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "Bad Request.",
            ApiError::NotFound { .. } => "Resource not found.",
            ApiError::Unprocessable { .. } => "Unprocessable entity.",
        }
    }

    fn debug_message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest { debug_message }
            | ApiError::NotFound { debug_message }
            | ApiError::Unprocessable { debug_message } => debug_message.as_deref(),
        }
    }
}

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        if err.is_not_found() {
            ApiError::not_found(err.to_string())
        } else {
            ApiError::unprocessable(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Non-integer path ids never match a route.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::not_found(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if let Some(debug_message) = self.debug_message() {
            tracing::warn!(
                status = %status,
                message = %message,
                debug_message = %debug_message,
                "Request rejected"
            );
        } else {
            tracing::warn!(status = %status, message = %message, "Request rejected");
        }

        let body = ErrorResponse::new(status.as_u16(), message);
        (status, Json(body)).into_response()
    }
}
