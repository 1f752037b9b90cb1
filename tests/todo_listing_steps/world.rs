//! Shared world state for to-do listing BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use sard_todo::todo::{
    adapters::memory::InMemoryToDoSource,
    domain::ToDoItem,
    services::{ToDoListError, ToDoListService},
};

/// Service type used by the BDD world.
pub type TestListingService = ToDoListService<InMemoryToDoSource>;

/// Scenario world for to-do listing behaviour tests.
pub struct ToDoListingWorld {
    pub source: Arc<InMemoryToDoSource>,
    pub service: TestListingService,
    pub last_result: Option<Result<Vec<ToDoItem>, ToDoListError>>,
}

impl ToDoListingWorld {
    /// Creates a world over an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        let source = Arc::new(InMemoryToDoSource::new());
        let service = ToDoListService::new(Arc::clone(&source));

        Self {
            source,
            service,
            last_result: None,
        }
    }
}

impl Default for ToDoListingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ToDoListingWorld {
    ToDoListingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
