pub mod api_client;
mod commands;
pub mod error;
pub mod poller;
pub mod utils;



use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use miette::Result;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ClientConfig;

#[derive(Parser)]
#[command(name = "verdict")]
#[command(author, version, about = "Fake news detector client", long_about = None)]
pub struct Cli {
    /// Override the classifier URL (default: VERDICT_API_URL env or http://127.0.0.1:10000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Seconds to wait for the classifier before giving up on a request
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the classifier is reachable
    Health,
    /// Classify a news snippet (argument, --file, or stdin)
    Analyze {
        /// Article text
        text: Option<String>,
        /// Read the article from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Poll the classifier and report status changes until interrupted
    Watch {
        /// Seconds between health checks [default: 10]
        #[arg(long)]
        interval_secs: Option<u64>,
    },
    /// Serve the web UI and expose the classifier under /api
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Classifier to forward /api requests to (default: --api-url, VERDICT_API_URL, or http://127.0.0.1:10000)
        #[arg(long)]
        upstream: Option<String>,
    },
}

impl Cli {
    /// Client settings: environment first, then global flags, then
    /// subcommand-specific overrides.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env()
            .with_api_base(self.api_url.as_deref())
            .with_request_timeout(Duration::from_secs(self.timeout_secs));

        if let Some(Commands::Watch {
            interval_secs: Some(secs),
        }) = &self.command
        {
            config = config.with_health_interval(Duration::from_secs((*secs).max(1)));
        }
        config
    }
}

/// reqwest is built without a bundled crypto provider
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Initialize tracing subscriber with env filter
fn init_tracing(default_directives: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_directives = match cli.command {
        Some(Commands::Serve { .. }) => "verdict=info,tower_http=info",
        _ => "verdict=warn",
    };
    init_tracing(log_directives);
    install_crypto_provider();

    let config = cli.client_config();
    let api_client = api_client::ApiClient::new(&config);

    match cli.command {
        Some(Commands::Health) => {
            let output = commands::health::status(&api_client).await?;
            println!("{}", output);
        }
        Some(Commands::Analyze { text, file, format }) => {
            let text = utils::read_input(text, file.as_deref(), std::io::stdin())?;
            let output = commands::analyze::analyze(&api_client, &text, &format).await?;
            println!("{}", output);
        }
        Some(Commands::Watch { .. }) => {
            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => on_interrupt.cancel(),
                    Err(e) => warn!(error = %e, "failed to listen for ctrl-c"),
                }
            });

            commands::health::watch(&api_client, config.health_interval, cancel, |line| {
                println!("{}", line)
            })
            .await;
        }
        Some(Commands::Serve {
            host,
            port,
            upstream,
        }) => {
            let upstream = upstream.or(cli.api_url);
            commands::serve::run(host, port, upstream, config.request_timeout).await?;
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["verdict", "--help"]);
        }
    }

    Ok(())
}
