//! In-memory to-do source.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::CandidateRecord,
    ports::{ToDoSource, ToDoSourceError, ToDoSourceResult},
};

/// Thread-safe in-memory to-do source.
///
/// Records are returned in insertion order. A configured failure makes every
/// fetch fail with a transport error until it is cleared, which models an
/// unreachable backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToDoSource {
    state: Arc<RwLock<InMemorySourceState>>,
}

#[derive(Debug, Default)]
struct InMemorySourceState {
    records: Vec<CandidateRecord>,
    failure: Option<String>,
    fetches: usize,
}

fn lock_error(err: impl std::fmt::Display) -> ToDoSourceError {
    ToDoSourceError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryToDoSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = CandidateRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemorySourceState {
                records: records.into_iter().collect(),
                ..InMemorySourceState::default()
            })),
        }
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn push(&self, record: CandidateRecord) -> ToDoSourceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.records.push(record);
        Ok(())
    }

    /// Makes subsequent fetches fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_with(&self, message: impl Into<String>) -> ToDoSourceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failure = Some(message.into());
        Ok(())
    }

    /// Clears a configured failure.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn recover(&self) -> ToDoSourceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failure = None;
        Ok(())
    }

    /// Returns how many fetches have been attempted.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fetch_count(&self) -> ToDoSourceResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.fetches)
    }
}

#[async_trait]
impl ToDoSource for InMemoryToDoSource {
    async fn fetch_candidates(&self) -> ToDoSourceResult<Vec<CandidateRecord>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.fetches += 1;
        if let Some(message) = &state.failure {
            return Err(ToDoSourceError::transport(std::io::Error::other(
                message.clone(),
            )));
        }
        Ok(state.records.clone())
    }
}
