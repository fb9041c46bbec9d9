//! HTTP API server.

mod handlers;
pub mod routes;
mod state;


use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use handlers::{
    CreateStudentRequest, ErrorResponse, PatchStudentRequest, ReplaceStudentRequest,
    StudentResponse,
};
pub use state::AppState;

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "ROSTER_HOST";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "ROSTER_PORT";

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind to {addr}: {source}")]
    #[diagnostic(code(roster::api::bind))]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(roster::api::server))]
    Server(#[source] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
        }
    }
}

impl Config {
    /// Defaults overridden by `ROSTER_HOST` / `ROSTER_PORT` when set and parseable.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var(HOST_ENV) {
            match host.parse() {
                Ok(host) => config.host = host,
                Err(_) => warn!("Ignoring invalid {}: {}", HOST_ENV, host),
            }
        }
        if let Ok(port) = env::var(PORT_ENV) {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid {}: {}", PORT_ENV, port),
            }
        }

        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration and database.
///
/// Serves until Ctrl-C is received.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let app = routes::create_router(AppState::new(db)).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Server)?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
