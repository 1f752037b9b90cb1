//! Process configuration read once at startup.
//!
//! Every setting comes from the environment. Required variables that are
//! missing or empty stop the process before it binds its port.
//!
//! # Backend selection
//!
//! When `MONGO_URL` is set the service lists pending documents from a
//! `MongoDB` collection. Otherwise it lists cards from a GraphQL task board
//! and `GRAPHQL_URL`, `USER`, `PASS`, `BOARD` and `LIST` are all required.

use crate::todo::domain::DEFAULT_PROFILE;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 80;
/// Database used when `MONGO_DATABASE` is unset.
pub const DEFAULT_DATABASE: &str = "sard";
/// Collection used when `MONGO_COLLECTION` is unset.
pub const DEFAULT_COLLECTION: &str = "material";
/// Outbound call timeout used when `UPSTREAM_TIMEOUT_SECS` is unset.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{name} not set. {hint}")]
    MissingVariable {
        /// Variable name.
        name: &'static str,
        /// Guidance printed alongside the error.
        hint: &'static str,
    },

    /// A variable is set to a value that cannot be used.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Settings for the GraphQL task board backend.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardConfig {
    endpoint: String,
    username: String,
    password: String,
    board_title: String,
    list_title: String,
    default_profile: String,
}

impl BoardConfig {
    /// Creates board settings with the default profile.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        board_title: impl Into<String>,
        list_title: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            board_title: board_title.into(),
            list_title: list_title.into(),
            default_profile: DEFAULT_PROFILE.to_owned(),
        }
    }

    /// Sets the profile substituted for cards without one.
    #[must_use]
    pub fn with_default_profile(mut self, profile: impl Into<String>) -> Self {
        self.default_profile = profile.into();
        self
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the login username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the login password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the board title.
    #[must_use]
    pub fn board_title(&self) -> &str {
        &self.board_title
    }

    /// Returns the list title.
    #[must_use]
    pub fn list_title(&self) -> &str {
        &self.list_title
    }

    /// Returns the profile substituted for cards without one.
    #[must_use]
    pub fn default_profile(&self) -> &str {
        &self.default_profile
    }
}

impl fmt::Debug for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("board_title", &self.board_title)
            .field("list_title", &self.list_title)
            .field("default_profile", &self.default_profile)
            .finish()
    }
}

/// Settings for the `MongoDB` backend.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    uri: String,
    database: String,
    collection: String,
}

impl DocumentConfig {
    /// Creates document settings with the default database and collection.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
        }
    }

    /// Sets the database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets the collection name.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Returns the connection string.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Returns the collection name.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl fmt::Debug for DocumentConfig {
    // Connection strings routinely embed credentials.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentConfig")
            .field("uri", &"<redacted>")
            .field("database", &self.database)
            .field("collection", &self.collection)
            .finish()
    }
}

/// The single backend the service reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// GraphQL task board.
    Board(BoardConfig),
    /// `MongoDB` collection.
    Document(DocumentConfig),
}

impl BackendConfig {
    /// Returns a short backend label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Board(_) => "board",
            Self::Document(_) => "document",
        }
    }
}

/// Immutable process-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    port: u16,
    upstream_timeout: Duration,
    backend: BackendConfig,
}

impl ServiceConfig {
    /// Creates settings for `backend` with default port and timeout.
    #[must_use]
    pub const fn new(backend: BackendConfig) -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            backend,
        }
    }

    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing or a
    /// numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Lookup(lookup);
        let port = env.parsed("PORT", DEFAULT_PORT)?;
        let timeout_secs = env.parsed("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT.as_secs())?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "UPSTREAM_TIMEOUT_SECS",
                value: "0".to_owned(),
                reason: "timeout must be at least one second".to_owned(),
            });
        }

        let backend = match env.optional("MONGO_URL") {
            Some(uri) => BackendConfig::Document(load_document(&env, uri)),
            None => BackendConfig::Board(load_board(&env)?),
        };

        Ok(Self {
            port,
            upstream_timeout: Duration::from_secs(timeout_secs),
            backend,
        })
    }

    /// Sets the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the outbound call timeout.
    #[must_use]
    pub const fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// Returns the listen port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the bound applied to every outbound call.
    #[must_use]
    pub const fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }

    /// Returns the backend settings.
    #[must_use]
    pub const fn backend(&self) -> &BackendConfig {
        &self.backend
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|value| !value.is_empty())
    }

    fn required(&self, name: &'static str, hint: &'static str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or(ConfigError::MissingVariable { name, hint })
    }

    fn parsed<T>(&self, name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: fmt::Display,
    {
        self.optional(name).map_or(Ok(default), |value| {
            value.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
                name,
                reason: err.to_string(),
                value,
            })
        })
    }
}

fn load_board<F>(env: &Lookup<F>) -> Result<BoardConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = env.required(
        "GRAPHQL_URL",
        "Example: GRAPHQL_URL=http://myserver:80",
    )?;
    let username = env.required("USER", "Board login username is required.")?;
    let password = env.required("PASS", "Board login password is required.")?;
    let list_title = env.required("LIST", "Title of the board list to read is required.")?;
    let board_title = env.required("BOARD", "Title of the board to read is required.")?;
    let config = BoardConfig::new(endpoint, username, password, board_title, list_title);
    Ok(match env.optional("DEFAULT_PROFILE") {
        Some(profile) => config.with_default_profile(profile),
        None => config,
    })
}

fn load_document<F>(env: &Lookup<F>, uri: String) -> DocumentConfig
where
    F: Fn(&str) -> Option<String>,
{
    DocumentConfig::new(uri)
        .with_database(
            env.optional("MONGO_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_owned()),
        )
        .with_collection(
            env.optional("MONGO_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_owned()),
        )
}
