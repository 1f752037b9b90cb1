//! Error types for to-do domain validation.

use thiserror::Error;

/// Errors returned while constructing domain to-do values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToDoDomainError {
    /// The evidence path is empty.
    #[error("evidence path must not be empty")]
    EmptyEvidencePath,
}
