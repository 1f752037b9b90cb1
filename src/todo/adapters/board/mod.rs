//! GraphQL task board adapter.
//!
//! The adapter authenticates once when it is built, keeps the resulting
//! [`BoardSession`] for the process lifetime, and issues one query per
//! listing. All caller-provided values travel as GraphQL variables.

mod client;
mod schema;
mod source;

pub use client::{BoardClientError, BoardSession, GraphQlBoardClient, GraphQlRequest};
pub use schema::{
    AUTHORIZE_QUERY, AuthorizeData, AuthorizePayload, BOARD_CARDS_QUERY, BoardData, BoardPayload,
    CardFieldValue, CardPayload, CustomFieldDefinition, GraphQlError, GraphQlResponse,
    ListPayload,
};
pub use source::{BoardToDoSource, REQUIRED_FIELDS, extract_candidates};
