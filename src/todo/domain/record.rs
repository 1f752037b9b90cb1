//! Backend-neutral candidate records.

use serde::{Deserialize, Serialize};

/// Status value marking a record as pending work.
///
/// An empty status is treated as pending too.
pub const PENDING_STATUS: &str = "todo";

/// Profile substituted when a board card carries no `profile` value.
///
/// The literal is inherited from the board deployments this service reads;
/// it carries no meaning beyond "no profile chosen".
pub const DEFAULT_PROFILE: &str = "pedo";

/// A record fetched from a backend before qualification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    path: String,
    status: String,
    profile: Option<String>,
}

impl CandidateRecord {
    /// Creates a record with the given path and status and no profile.
    #[must_use]
    pub fn new(path: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: status.into(),
            profile: None,
        }
    }

    /// Sets the record profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Returns the raw record path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw record status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the record profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Returns `true` when the status is empty or exactly `"todo"`.
    ///
    /// The comparison is exact: no trimming and no case folding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status.is_empty() || self.status == PENDING_STATUS
    }

    /// Returns `true` when the record belongs in the to-do listing.
    #[must_use]
    pub fn qualifies(&self) -> bool {
        !self.path.is_empty() && self.is_pending()
    }

    /// Consumes the record, returning its path and profile.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.path, self.profile)
    }
}
