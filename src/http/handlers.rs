//! Request handlers.

use super::ApiError;
use crate::todo::{domain::ToDoItem, ports::ToDoSource, services::ToDoListService};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

/// Handles `GET /`.
///
/// Answers `200` with a JSON array of to-do items (`[]` when nothing
/// qualifies), `400` with `error fetching cards: ...` when the backend fails,
/// and `500` with `error building json: ...` when encoding fails.
pub async fn list_todo<S>(State(service): State<ToDoListService<S>>) -> Response
where
    S: ToDoSource + ?Sized + 'static,
{
    match service.list_todo().await.map_err(ApiError::from) {
        Ok(items) => encode(&items).unwrap_or_else(failure),
        Err(err) => failure(err),
    }
}

fn encode(items: &[ToDoItem]) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(items)?;
    tracing::info!(items = items.len(), "served to-do listing");
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn failure(err: ApiError) -> Response {
    match &err {
        ApiError::Fetch(cause) => tracing::warn!(error = %cause, "to-do listing failed"),
        ApiError::Encode(cause) => tracing::error!(error = %cause, "to-do listing encoding failed"),
    }
    err.into_response()
}
