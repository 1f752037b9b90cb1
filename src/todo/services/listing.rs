//! Service layer turning backend records into the to-do listing.

use crate::todo::{
    domain::ToDoItem,
    ports::{ToDoSource, ToDoSourceError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for the to-do listing.
#[derive(Debug, Error)]
pub enum ToDoListError {
    /// The backend query failed.
    #[error(transparent)]
    Source(#[from] ToDoSourceError),
}

/// Result type for to-do listing operations.
pub type ToDoListResult<T> = Result<T, ToDoListError>;

/// To-do listing service over a single configured backend.
pub struct ToDoListService<S>
where
    S: ToDoSource + ?Sized,
{
    source: Arc<S>,
}

impl<S> Clone for ToDoListService<S>
where
    S: ToDoSource + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> ToDoListService<S>
where
    S: ToDoSource + ?Sized,
{
    /// Creates a listing service reading from `source`.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Lists the pending to-do items in backend order.
    ///
    /// Records with an empty path, or with a status other than empty or
    /// `"todo"`, are dropped. Either the full qualifying set is returned or
    /// an error; there are no partial results.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoListError::Source`] when the backend query fails.
    pub async fn list_todo(&self) -> ToDoListResult<Vec<ToDoItem>> {
        let candidates = self.source.fetch_candidates().await?;
        let fetched = candidates.len();
        let items: Vec<ToDoItem> = candidates
            .into_iter()
            .filter_map(ToDoItem::from_candidate)
            .collect();
        tracing::debug!(fetched, listed = items.len(), "built to-do listing");
        Ok(items)
    }
}
