//! Error type for the JSON endpoints.
//!
//! JSON endpoints answer with a small `{error, message}` body and never
//! render the HTML error templates.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use bandcache_core::QueryError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub struct JsonError {
    status: StatusCode,
    message: String,
}

impl JsonError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }
}

impl From<QueryError> for JsonError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidArgument { .. } => Self::bad_request(err.to_string()),
        }
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.status.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
