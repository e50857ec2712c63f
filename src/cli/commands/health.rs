use std::time::Duration;

use chrono::{DateTime, Local};
use tokio_util::sync::CancellationToken;

use crate::cli::api_client::ApiClient;
use crate::cli::error::{CliError, CliResult};
use crate::cli::poller::poll_health;
use crate::state::{AppState, Event, status_label};

/// One-shot health check
pub async fn status(api_client: &ApiClient) -> CliResult<String> {
    if api_client.is_online().await {
        Ok(status_label(true).to_string())
    } else {
        Err(CliError::BackendDown {
            url: api_client.base_url().to_string(),
        })
    }
}

/// Poll until cancelled, emitting a line whenever the status changes.
/// The first check always emits.
pub async fn watch<F>(
    api_client: &ApiClient,
    period: Duration,
    cancel: CancellationToken,
    mut emit: F,
) where
    F: FnMut(String),
{
    let mut state = AppState::default();
    let mut first = true;

    poll_health(api_client, period, cancel, |online| {
        let changed = first || state.backend_online != online;
        first = false;
        state.apply(Event::HealthChecked { online });
        if changed {
            emit(format_transition(Local::now(), online));
        }
    })
    .await;
}

pub(crate) fn format_transition(at: DateTime<Local>, online: bool) -> String {
    format!("[{}] {}", at.format("%Y-%m-%d %H:%M:%S"), status_label(online))
}
