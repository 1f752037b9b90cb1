//! Application services for the to-do listing.

mod listing;

pub use listing::{ToDoListError, ToDoListResult, ToDoListService};
