//! Domain model for the to-do listing.
//!
//! Records arrive from a backend in a neutral [`CandidateRecord`] shape. The
//! qualification rule and the output path derivation live here so that every
//! backend is filtered and reshaped identically.

mod error;
mod item;
mod record;

pub use error::ToDoDomainError;
pub use item::{EvidencePath, OUTPUT_DIR_NAME, ToDoItem};
pub use record::{CandidateRecord, DEFAULT_PROFILE, PENDING_STATUS};
