//! Error responses of the HTTP surface.

use crate::todo::services::ToDoListError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures reported to HTTP clients as a plain-text line.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend listing failed; answered with `400 Bad Request`.
    #[error("error fetching cards: {0}")]
    Fetch(#[from] ToDoListError),

    /// The listing could not be encoded; answered with
    /// `500 Internal Server Error`.
    #[error("error building json: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the status code sent for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Fetch(_) => StatusCode::BAD_REQUEST,
            Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), format!("{self}\n")).into_response()
    }
}
