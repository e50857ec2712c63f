//! Gateway command - serves the web UI and forwards /api to the classifier

use std::net::IpAddr;
use std::time::Duration;

use miette::{IntoDiagnostic, Result};

use crate::config::{BuildMode, ClientConfig, resolve_api_base};
use crate::server::{self, Config};

/// Run the gateway server
pub async fn run(
    host: IpAddr,
    port: u16,
    upstream: Option<String>,
    request_timeout: Duration,
) -> Result<()> {
    let config = gateway_config(host, port, upstream.as_deref(), request_timeout);

    println!();
    println!("verdict gateway starting...");
    println!("   Frontend: http://{}:{}/", config.host, config.port);
    println!("   API:      http://{}:{}/api", config.host, config.port);
    println!("   Upstream: {}", config.upstream);
    println!();

    server::run(config).await.into_diagnostic()?;

    Ok(())
}

/// Upstream precedence: --upstream flag > VERDICT_API_URL > development default
pub(crate) fn gateway_config(
    host: IpAddr,
    port: u16,
    upstream: Option<&str>,
    request_timeout: Duration,
) -> Config {
    let upstream = match upstream {
        Some(url) => resolve_api_base(Some(url), BuildMode::Development),
        None => ClientConfig::from_env().api_base,
    };

    Config {
        host,
        port,
        upstream,
        request_timeout,
    }
}
