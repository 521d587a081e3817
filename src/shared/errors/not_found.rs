use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::shared::errors::api_error::message_response;
use crate::shared::errors::http_status_error::HttpStatusError;

/// The requested resource does not exist (HTTP 404).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl HttpStatusError for NotFoundError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        message_response(self.status_code(), &self.message)
    }
}
