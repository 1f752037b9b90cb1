//! HTTP surface of the service.
//!
//! One route, `GET /`, returns the to-do listing as a JSON array. Any other
//! method on `/` is answered with `405 Method Not Allowed` by the router.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::list_todo;

use crate::todo::{ports::ToDoSource, services::ToDoListService};
use axum::{Router, routing::get};

/// Builds the router serving the listing of `service`.
pub fn router<S>(service: ToDoListService<S>) -> Router
where
    S: ToDoSource + ?Sized + 'static,
{
    Router::new()
        .route("/", get(list_todo::<S>))
        .with_state(service)
}
