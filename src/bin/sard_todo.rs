//! Serves the SARD to-do listing over HTTP.
//!
//! Usage:
//!
//! ```text
//! GRAPHQL_URL=http://wekan:4000/graphql USER=analyst PASS=secret \
//!     BOARD=Cases LIST=Evidence sard-todo
//! MONGO_URL=mongodb://db:27017 sard-todo
//! ```
//!
//! All settings come from the environment; see [`sard_todo::config`]. A
//! missing required variable, or a failed board login, stops the process
//! with a non-zero status before the port is bound. `RUST_LOG` controls log
//! verbosity and defaults to `info`.

use sard_todo::{
    config::{BackendConfig, ConfigError, ServiceConfig},
    http,
    todo::{
        adapters::{
            board::{BoardClientError, BoardToDoSource},
            document::DocumentToDoSource,
        },
        ports::ToDoSource,
        services::ToDoListService,
    },
};
use std::io::IsTerminal;
use std::net::{Ipv4Addr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Errors that stop the service.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("board authentication failed: {0}")]
    Board(#[from] BoardClientError),
    #[error("document database setup failed: {0}")]
    Document(#[from] mongodb::error::Error),
    #[error("could not start server: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "sard-todo stopped");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

async fn run() -> Result<(), StartupError> {
    let config = ServiceConfig::from_env()?;
    tracing::info!(
        backend = config.backend().kind(),
        port = config.port(),
        timeout_secs = config.upstream_timeout().as_secs(),
        "configuration loaded"
    );

    let timeout = config.upstream_timeout();
    match config.backend() {
        BackendConfig::Board(board) => {
            let source = BoardToDoSource::connect(board, timeout).await?;
            serve(&config, source).await
        }
        BackendConfig::Document(document) => {
            let source = DocumentToDoSource::connect(document, timeout).await?;
            serve(&config, source).await
        }
    }
}

async fn serve<S>(config: &ServiceConfig, source: S) -> Result<(), StartupError>
where
    S: ToDoSource + 'static,
{
    let service = ToDoListService::new(Arc::new(source));
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port()));
    let listener = TcpListener::bind(address)
        .await
        .map_err(StartupError::Serve)?;
    tracing::info!(%address, "listening");

    axum::serve(listener, http::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
