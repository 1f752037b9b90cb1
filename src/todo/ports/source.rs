//! Source port for fetching candidate to-do records from a backend.

use crate::todo::domain::CandidateRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do source operations.
pub type ToDoSourceResult<T> = Result<T, ToDoSourceError>;

/// Backend contract for the to-do listing.
///
/// Implementations perform exactly one outbound query per call and return
/// records in backend order. Qualification is applied by the caller.
#[async_trait]
pub trait ToDoSource: Send + Sync {
    /// Fetches the current candidate records.
    ///
    /// # Errors
    ///
    /// Returns a [`ToDoSourceError`] when the backend cannot be reached,
    /// rejects the query, or answers with an unexpected shape.
    async fn fetch_candidates(&self) -> ToDoSourceResult<Vec<CandidateRecord>>;
}

/// Errors returned by to-do source implementations.
#[derive(Debug, Clone, Error)]
pub enum ToDoSourceError {
    /// The backend reported a logical error; carries its first message.
    #[error("{0}")]
    Rejected(String),

    /// A custom field required for extraction is missing from the board.
    #[error("field {0} not found")]
    MissingCustomField(String),

    /// The configured board does not exist or is not visible.
    #[error("board '{0}' not found")]
    BoardNotFound(String),

    /// The configured list does not exist on the board.
    #[error("list '{0}' not found")]
    ListNotFound(String),

    /// The backend could not be reached or the exchange failed midway.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a body that does not match the schema.
    #[error("malformed response: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl ToDoSourceError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    #[must_use]
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
