//! Port contracts for the to-do listing.
//!
//! Ports define backend-agnostic interfaces used by the listing service.

pub mod source;

pub use source::{ToDoSource, ToDoSourceError, ToDoSourceResult};
