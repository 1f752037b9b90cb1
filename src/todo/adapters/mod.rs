//! Adapter implementations of the to-do source port.
//!
//! - [`board`]: GraphQL task board (board/list/card custom fields)
//! - [`document`]: `MongoDB` collection of evidence documents
//! - [`memory`]: in-process records for tests and local runs

pub mod board;
pub mod document;
pub mod memory;
