//! In-memory to-do source for tests and local runs.

mod source;

pub use source::InMemoryToDoSource;
