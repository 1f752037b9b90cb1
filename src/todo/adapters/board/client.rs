//! HTTP client for the board GraphQL endpoint.

use super::schema::{AUTHORIZE_QUERY, AuthorizeData, GraphQlResponse};
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by the board GraphQL client.
#[derive(Debug, Clone, Error)]
pub enum BoardClientError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid GraphQL endpoint '{url}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(Arc<reqwest::Error>),

    /// The server answered with a non-success status and no GraphQL body.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// The response body is not a valid GraphQL envelope for the query.
    #[error("malformed response: {0}")]
    Decode(Arc<serde_json::Error>),

    /// The server reported errors; carries the first message.
    #[error("{0}")]
    Rejected(String),

    /// The response carried no payload for the named field.
    #[error("response carried no {0} payload")]
    MissingPayload(&'static str),
}

impl BoardClientError {
    fn transport(err: reqwest::Error) -> Self {
        Self::Transport(Arc::new(err))
    }
}

/// Body of a GraphQL request: query document plus variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    /// Creates a request for `query` bound to `variables`.
    #[must_use]
    pub const fn new(query: &'a str, variables: V) -> Self {
        Self { query, variables }
    }
}

#[derive(Serialize)]
struct AuthorizeVariables<'a> {
    user: &'a str,
    password: &'a str,
}

/// Credential obtained from a successful board login.
///
/// Held for the process lifetime; the board API offers no refresh, so the
/// session is assumed valid for every later query.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardSession {
    user_id: String,
    token: String,
}

impl BoardSession {
    /// Creates a session from identifiers returned by a login.
    #[must_use]
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }

    /// Returns the board user identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for BoardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardSession")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Client for one board GraphQL endpoint.
///
/// The inner `reqwest` client pools connections, so one instance is shared by
/// every request the service handles.
#[derive(Debug, Clone)]
pub struct GraphQlBoardClient {
    http: Client,
    endpoint: Url,
}

impl GraphQlBoardClient {
    /// Creates a client whose calls are bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::InvalidEndpoint`] when `endpoint` is not a
    /// URL, or [`BoardClientError::Transport`] when the HTTP client cannot be
    /// initialised.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, BoardClientError> {
        let parsed = Url::parse(endpoint).map_err(|err| BoardClientError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: err.to_string(),
        })?;
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(BoardClientError::transport)?;
        Ok(Self {
            http,
            endpoint: parsed,
        })
    }

    /// Returns the endpoint queries are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one GraphQL request and decodes the typed envelope.
    ///
    /// A non-success HTTP status is only an error when its body is not a
    /// GraphQL envelope; servers commonly pair `400` with an error list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::Transport`] when the exchange fails,
    /// [`BoardClientError::UnexpectedStatus`] for non-success statuses without
    /// a GraphQL body, and [`BoardClientError::Decode`] for malformed bodies.
    pub async fn execute<V, T>(
        &self,
        request: &GraphQlRequest<'_, V>,
    ) -> Result<GraphQlResponse<T>, BoardClientError>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(BoardClientError::transport)?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(BoardClientError::transport)?;

        match serde_json::from_slice::<GraphQlResponse<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => {
                Err(BoardClientError::UnexpectedStatus(status.as_u16()))
            }
            Err(err) => Err(BoardClientError::Decode(Arc::new(err))),
        }
    }

    /// Logs in and returns the session used by later queries.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::Rejected`] with the first server message
    /// when the login is refused, [`BoardClientError::MissingPayload`] when
    /// the response holds no usable session, or any error of
    /// [`Self::execute`].
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<BoardSession, BoardClientError> {
        let request = GraphQlRequest::new(
            AUTHORIZE_QUERY,
            AuthorizeVariables {
                user: username,
                password,
            },
        );
        let response: GraphQlResponse<AuthorizeData> = self.execute(&request).await?;
        let data = into_data(response)?;
        let payload = data
            .authorize
            .filter(|payload| !payload.token.is_empty())
            .ok_or(BoardClientError::MissingPayload("authorize"))?;
        tracing::info!(user_id = %payload.user_id, "authenticated against board API");
        Ok(BoardSession::new(payload.user_id, payload.token))
    }
}

/// Unwraps a GraphQL envelope, failing on the first reported error.
///
/// # Errors
///
/// Returns [`BoardClientError::Rejected`] when the error list is non-empty and
/// [`BoardClientError::MissingPayload`] when `data` is absent.
pub(crate) fn into_data<T>(response: GraphQlResponse<T>) -> Result<T, BoardClientError> {
    if let Some(first) = response.errors.into_iter().next() {
        return Err(BoardClientError::Rejected(first.message));
    }
    response.data.ok_or(BoardClientError::MissingPayload("data"))
}
