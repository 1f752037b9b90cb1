//! `MongoDB` document collection adapter.
//!
//! Filtering on `state`, projection and the document cap are pushed to the
//! server; the adapter only maps documents into candidate records.

mod models;
mod source;

pub use models::{EvidenceDocument, MAX_DOCUMENTS, evidence_projection, pending_filter};
pub use source::DocumentToDoSource;
