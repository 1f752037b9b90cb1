//! Document shape and query builders for the evidence collection.

use crate::todo::domain::{CandidateRecord, PENDING_STATUS};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

/// Upper bound on documents returned by one listing.
pub const MAX_DOCUMENTS: i64 = 100;

/// Evidence document as stored in the collection.
///
/// Only the projected fields are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceDocument {
    /// Path of the evidence file.
    #[serde(default)]
    pub path: String,
    /// Processing state, `"todo"` for pending work.
    #[serde(default)]
    pub state: String,
}

impl From<EvidenceDocument> for CandidateRecord {
    fn from(document: EvidenceDocument) -> Self {
        Self::new(document.path, document.state)
    }
}

/// Filter selecting pending documents.
#[must_use]
pub fn pending_filter() -> Document {
    doc! { "state": PENDING_STATUS }
}

/// Projection limited to the fields the listing reads.
#[must_use]
pub fn evidence_projection() -> Document {
    doc! { "_id": 0, "path": 1, "state": 1 }
}
