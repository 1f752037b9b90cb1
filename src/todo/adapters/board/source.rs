//! To-do source backed by one list of a GraphQL task board.

use super::client::{
    BoardClientError, BoardSession, GraphQlBoardClient, GraphQlRequest, into_data,
};
use super::schema::{BOARD_CARDS_QUERY, BoardData, BoardPayload, CardPayload};
use crate::config::BoardConfig;
use crate::todo::{
    domain::CandidateRecord,
    ports::{ToDoSource, ToDoSourceError, ToDoSourceResult},
};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Custom fields every board must define, in lookup order.
pub const REQUIRED_FIELDS: [&str; 3] = ["path", "status", "profile"];

#[derive(Serialize)]
struct BoardCardsVariables<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    token: &'a str,
    board: &'a str,
    list: &'a str,
}

/// Identifiers of the custom fields read from each card.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldIds {
    path: String,
    status: String,
    profile: String,
}

impl FieldIds {
    fn resolve(board: &BoardPayload) -> ToDoSourceResult<Self> {
        let by_name: HashMap<&str, &str> = board
            .custom_fields
            .iter()
            .map(|field| (field.name.as_str(), field.id.as_str()))
            .collect();
        let lookup = |name: &str| {
            by_name
                .get(name)
                .map(|id| (*id).to_owned())
                .ok_or_else(|| ToDoSourceError::MissingCustomField(name.to_owned()))
        };
        let [path, status, profile] = REQUIRED_FIELDS;
        Ok(Self {
            path: lookup(path)?,
            status: lookup(status)?,
            profile: lookup(profile)?,
        })
    }

    fn candidate(&self, card: &CardPayload, default_profile: &str) -> CandidateRecord {
        let mut path = String::new();
        let mut status = String::new();
        let mut profile: Option<String> = None;
        for field in &card.custom_fields {
            let Some(value) = field.text() else {
                continue;
            };
            if field.id == self.path {
                path.clone_from(&value);
            }
            if field.id == self.status {
                status.clone_from(&value);
            }
            if field.id == self.profile {
                profile = Some(value);
            }
        }
        CandidateRecord::new(path, status)
            .with_profile(profile.unwrap_or_else(|| default_profile.to_owned()))
    }
}

/// Extracts candidate records from a board payload.
///
/// Every card yields one record in list order; qualification is left to the
/// listing service.
///
/// # Errors
///
/// Returns [`ToDoSourceError::MissingCustomField`] when the board lacks a
/// `path`, `status` or `profile` field, and [`ToDoSourceError::ListNotFound`]
/// when the payload holds no list.
pub fn extract_candidates(
    board: &BoardPayload,
    list_title: &str,
    default_profile: &str,
) -> ToDoSourceResult<Vec<CandidateRecord>> {
    let ids = FieldIds::resolve(board)?;
    let list = board
        .list
        .as_ref()
        .ok_or_else(|| ToDoSourceError::ListNotFound(list_title.to_owned()))?;
    Ok(list
        .cards
        .iter()
        .map(|card| ids.candidate(card, default_profile))
        .collect())
}

impl From<BoardClientError> for ToDoSourceError {
    fn from(err: BoardClientError) -> Self {
        match err {
            BoardClientError::Rejected(message) => Self::Rejected(message),
            BoardClientError::Transport(inner) => Self::Transport(inner),
            BoardClientError::Decode(inner) => Self::Decode(inner),
            BoardClientError::MissingPayload(_) => Self::Decode(Arc::new(err)),
            BoardClientError::InvalidEndpoint { .. } | BoardClientError::UnexpectedStatus(_) => {
                Self::Transport(Arc::new(err))
            }
        }
    }
}

/// To-do source reading the cards of one board list.
#[derive(Debug, Clone)]
pub struct BoardToDoSource {
    client: GraphQlBoardClient,
    session: BoardSession,
    board_title: String,
    list_title: String,
    default_profile: String,
}

impl BoardToDoSource {
    /// Creates a source from an already authenticated session.
    #[must_use]
    pub fn new(client: GraphQlBoardClient, session: BoardSession, config: &BoardConfig) -> Self {
        Self {
            client,
            session,
            board_title: config.board_title().to_owned(),
            list_title: config.list_title().to_owned(),
            default_profile: config.default_profile().to_owned(),
        }
    }

    /// Builds the client, logs in, and returns a ready source.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardClientError`] when the endpoint is invalid or the
    /// login fails. Startup treats either as fatal.
    pub async fn connect(
        config: &BoardConfig,
        timeout: Duration,
    ) -> Result<Self, BoardClientError> {
        let client = GraphQlBoardClient::new(config.endpoint(), timeout)?;
        let session = client
            .authenticate(config.username(), config.password())
            .await?;
        Ok(Self::new(client, session, config))
    }

    /// Returns the session used for queries.
    #[must_use]
    pub const fn session(&self) -> &BoardSession {
        &self.session
    }
}

#[async_trait]
impl ToDoSource for BoardToDoSource {
    async fn fetch_candidates(&self) -> ToDoSourceResult<Vec<CandidateRecord>> {
        let request = GraphQlRequest::new(
            BOARD_CARDS_QUERY,
            BoardCardsVariables {
                user_id: self.session.user_id(),
                token: self.session.token(),
                board: &self.board_title,
                list: &self.list_title,
            },
        );
        let response = self.client.execute::<_, BoardData>(&request).await?;
        let board = into_data(response)?
            .board
            .ok_or_else(|| ToDoSourceError::BoardNotFound(self.board_title.clone()))?;
        let candidates = extract_candidates(&board, &self.list_title, &self.default_profile)?;
        tracing::debug!(
            board = %self.board_title,
            list = %self.list_title,
            cards = candidates.len(),
            "fetched board cards"
        );
        Ok(candidates)
    }
}
