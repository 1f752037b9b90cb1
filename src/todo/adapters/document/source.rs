//! To-do source backed by a `MongoDB` collection.

use super::models::{EvidenceDocument, MAX_DOCUMENTS, evidence_projection, pending_filter};
use crate::config::DocumentConfig;
use crate::todo::{
    domain::CandidateRecord,
    ports::{ToDoSource, ToDoSourceError, ToDoSourceResult},
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    error::{Error as DriverError, ErrorKind},
    options::ClientOptions,
};
use std::time::Duration;

const APP_NAME: &str = "sard-todo";

fn map_driver_error(err: DriverError) -> ToDoSourceError {
    if matches!(*err.kind, ErrorKind::BsonDeserialization(_)) {
        ToDoSourceError::decode(err)
    } else {
        ToDoSourceError::transport(err)
    }
}

/// To-do source reading pending documents from one collection.
///
/// The driver client owns a connection pool shared by every request.
#[derive(Debug, Clone)]
pub struct DocumentToDoSource {
    collection: Collection<EvidenceDocument>,
    query_timeout: Duration,
}

impl DocumentToDoSource {
    /// Creates a source over an existing collection handle.
    #[must_use]
    pub const fn new(collection: Collection<EvidenceDocument>, query_timeout: Duration) -> Self {
        Self {
            collection,
            query_timeout,
        }
    }

    /// Parses the connection string and opens the configured collection.
    ///
    /// The driver connects lazily; an unreachable server surfaces on the
    /// first listing, bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the driver error when the connection string is invalid.
    pub async fn connect(config: &DocumentConfig, timeout: Duration) -> Result<Self, DriverError> {
        let mut options = ClientOptions::parse(config.uri()).await?;
        options.app_name = Some(APP_NAME.to_owned());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        let client = Client::with_options(options)?;
        let collection = client
            .database(config.database())
            .collection::<EvidenceDocument>(config.collection());
        tracing::info!(
            database = %config.database(),
            collection = %config.collection(),
            "opened evidence collection"
        );
        Ok(Self::new(collection, timeout))
    }
}

#[async_trait]
impl ToDoSource for DocumentToDoSource {
    async fn fetch_candidates(&self) -> ToDoSourceResult<Vec<CandidateRecord>> {
        let cursor = self
            .collection
            .find(pending_filter())
            .projection(evidence_projection())
            .limit(MAX_DOCUMENTS)
            .max_time(self.query_timeout)
            .await
            .map_err(map_driver_error)?;
        let documents: Vec<EvidenceDocument> =
            cursor.try_collect().await.map_err(map_driver_error)?;
        tracing::debug!(
            collection = %self.collection.name(),
            documents = documents.len(),
            "fetched evidence documents"
        );
        Ok(documents.into_iter().map(CandidateRecord::from).collect())
    }
}
