// Capability shared by every error that knows which HTTP status it implies.
//
// Callers that sit at the HTTP boundary (an API Gateway handler, an axum route)
// ask the error for its status instead of matching on concrete types.

use axum::http::StatusCode;

pub trait HttpStatusError: std::error::Error {
    fn status_code(&self) -> StatusCode;
}
