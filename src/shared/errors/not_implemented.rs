use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::shared::errors::api_error::message_response;
use crate::shared::errors::http_status_error::HttpStatusError;

/// The operation exists in the contract but has no implementation (HTTP 501).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotImplementedError {
    message: String,
}

impl NotImplementedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl HttpStatusError for NotImplementedError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_IMPLEMENTED
    }
}

impl IntoResponse for NotImplementedError {
    fn into_response(self) -> Response {
        message_response(self.status_code(), &self.message)
    }
}
