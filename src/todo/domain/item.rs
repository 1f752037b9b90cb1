//! Output to-do items and output path derivation.

use super::{CandidateRecord, ToDoDomainError};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the output entry created next to each evidence file.
pub const OUTPUT_DIR_NAME: &str = "SARD";

/// Non-empty path of an evidence file, kept exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidencePath(Utf8PathBuf);

impl EvidencePath {
    /// Creates a validated evidence path.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoDomainError::EmptyEvidencePath`] when the path is empty.
    pub fn new(path: impl Into<String>) -> Result<Self, ToDoDomainError> {
        let raw = path.into();
        if raw.is_empty() {
            return Err(ToDoDomainError::EmptyEvidencePath);
        }
        Ok(Self(Utf8PathBuf::from(raw)))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the sibling `SARD` entry of this evidence file.
    ///
    /// `/a/b/file.txt` maps to `/a/b/SARD`, `/file.txt` to `/SARD` and a
    /// bare `file.txt` to `SARD`. A path ending in `/` names a directory and
    /// receives the entry inside itself. The result is lexically cleaned:
    /// repeated separators and `.` disappear and `..` consumes the preceding
    /// component, so `/a/../b//file.txt` maps to `/b/SARD`.
    #[must_use]
    pub fn output_path(&self) -> Utf8PathBuf {
        let raw = self.as_str();
        let directory = raw
            .rfind('/')
            .and_then(|end| raw.get(..=end))
            .unwrap_or_default();
        lexical_clean(&Utf8Path::new(directory).join(OUTPUT_DIR_NAME))
    }
}

/// Cleans `path` without touching the filesystem.
///
/// `..` above the root is dropped; leading `..` of a relative path is kept.
fn lexical_clean(path: &Utf8Path) -> Utf8PathBuf {
    let mut rooted = false;
    let mut parts: Vec<&str> = Vec::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => rooted = true,
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match parts.last().copied() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            Utf8Component::Normal(name) => parts.push(name),
        }
    }
    let mut cleaned = if rooted {
        Utf8PathBuf::from("/")
    } else {
        Utf8PathBuf::new()
    };
    cleaned.extend(parts);
    if cleaned.as_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

impl AsRef<Utf8Path> for EvidencePath {
    fn as_ref(&self) -> &Utf8Path {
        &self.0
    }
}

impl fmt::Display for EvidencePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the to-do listing as returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoItem {
    /// Path of the evidence file, unchanged.
    #[serde(rename = "evidencePath")]
    pub evidence_path: EvidencePath,
    /// Directory entry where results for the evidence are written.
    #[serde(rename = "outputPath")]
    pub output_path: Utf8PathBuf,
    /// Analysis profile; only board-backed items carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl ToDoItem {
    /// Creates an item for an evidence path, deriving its output path.
    #[must_use]
    pub fn new(evidence_path: EvidencePath, profile: Option<String>) -> Self {
        let output_path = evidence_path.output_path();
        Self {
            evidence_path,
            output_path,
            profile,
        }
    }

    /// Builds an item from a candidate record when the record qualifies.
    ///
    /// Returns `None` for records with an empty path or a status other than
    /// empty or `"todo"`.
    #[must_use]
    pub fn from_candidate(record: CandidateRecord) -> Option<Self> {
        if !record.qualifies() {
            return None;
        }
        let (path, profile) = record.into_parts();
        EvidencePath::new(path)
            .ok()
            .map(|evidence_path| Self::new(evidence_path, profile))
    }
}
