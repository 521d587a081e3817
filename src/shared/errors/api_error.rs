// Errors raised by the utilities that a Lambda API handler turns into a response.
//
// Responsibilities
// - Attach an HTTP status to every failure the utilities surface.
// - Render `{"message": "..."}` bodies, hiding internal failure details.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::shared::errors::http_status_error::HttpStatusError;
use crate::shared::errors::not_found::NotFoundError;
use crate::shared::errors::not_implemented::NotImplementedError;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    NotImplemented(#[from] NotImplementedError),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

impl HttpStatusError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(e) => e.status_code(),
            ApiError::NotImplemented(e) => e.status_code(),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "request failed");
                message_response(status, INTERNAL_SERVER_ERROR_MESSAGE)
            }
            e => message_response(status, &e.to_string()),
        }
    }
}

pub(crate) fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}
