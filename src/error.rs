use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde_json::json;

use crate::feed::ParseSortOrderError;
use crate::models::ParseCommentTypeError;
use crate::navigation::ParseViewError;

/// Failures the content store can report. Blank submissions are not errors;
/// they come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    ProjectNotFound(String),

    #[error("post {0} not found")]
    PostNotFound(String),
}

/// Error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A handler panicked while holding shared state.
    #[error("state lock poisoned")]
    Poisoned,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ParseViewError> for ApiError {
    fn from(e: ParseViewError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ParseSortOrderError> for ApiError {
    fn from(e: ParseSortOrderError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ParseCommentTypeError> for ApiError {
    fn from(e: ParseCommentTypeError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (code, message) = match self {
            ApiError::Store(e) => ("NOT_FOUND", e.to_string()),
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg.clone()),
            ApiError::Poisoned => {
                error!("Shared state lock poisoned");
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
        };
        HttpResponse::build(self.status_code()).json(json!({
            "error": { "code": code, "message": message }
        }))
    }
}
