//! Same-origin gateway for the web UI.
//!
//! Release builds of the web UI talk to the classifier through the relative
//! `/api` prefix. This server provides that prefix: it serves the embedded
//! frontend and forwards `/api/health` and `/api/predict` to the real
//! classifier.

mod proxy;
mod routes;
pub mod static_assets;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use routes::create_router;

/// Gateway configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Classifier base URL, without trailing slash
    pub upstream: String,
    /// Upper bound on a forwarded request
    pub request_timeout: Duration,
}

#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(verdict::server::bind),
        help("Is another process already listening on this port? Try --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(verdict::server::serve))]
    Serve(#[source] std::io::Error),
}

/// State shared by the forwarding handlers.
#[derive(Clone)]
pub struct GatewayState {
    client: reqwest::Client,
    upstream: Arc<str>,
    request_timeout: Duration,
}

impl GatewayState {
    pub fn new(upstream: &str, request_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: Arc::from(upstream.trim_end_matches('/')),
            request_timeout,
        }
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    fn upstream_url(&self, path: &str) -> String {
        format!("{}{}", self.upstream, path)
    }
}

/// Run the gateway with the given configuration
pub async fn run(config: Config) -> Result<(), ServerError> {
    let state = GatewayState::new(&config.upstream, config.request_timeout);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(upstream = %config.upstream, "gateway listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}


#[cfg(test)]
#[path = "static_assets_test.rs"]
mod static_assets_test;
