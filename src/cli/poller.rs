//! Periodic backend liveness checks.

use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cli::api_client::ApiClient;

/// Poll `/health` every `period` until `cancel` fires.
///
/// The first check runs immediately. `on_tick` receives the outcome of each
/// check. A slow check delays the next one rather than bunching them up.
pub async fn poll_health<F>(
    api: &ApiClient,
    period: Duration,
    cancel: CancellationToken,
    mut on_tick: F,
) where
    F: FnMut(bool),
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(base_url = api.base_url(), ?period, "health poller started");

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let online = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            online = api.is_online() => online,
        };
        debug!(online, "health tick");
        on_tick(online);
    }

    info!("health poller stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::test_support::{MockClassifier, init_crypto, spawn_mock_classifier, unreachable_url};

    fn client_for(url: &str) -> ApiClient {
        init_crypto();
        ApiClient::new(&ClientConfig::default().with_api_base(Some(url)))
    }

    #[tokio::test]
    async fn test_first_check_is_immediate_and_repeats() {
        let server = spawn_mock_classifier(MockClassifier::default()).await;
        let api = client_for(&server.url);
        let cancel = CancellationToken::new();
        let stop = cancel.clone();

        let mut ticks = Vec::new();
        poll_health(&api, Duration::from_millis(20), cancel, |online| {
            ticks.push(online);
            if ticks.len() == 3 {
                stop.cancel();
            }
        })
        .await;

        assert_eq!(ticks, vec![true, true, true]);
        assert_eq!(server.health_calls(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_reports_offline() {
        let api = client_for(&unreachable_url().await);
        let cancel = CancellationToken::new();
        let stop = cancel.clone();

        let mut ticks = Vec::new();
        poll_health(&api, Duration::from_millis(10), cancel, |online| {
            ticks.push(online);
            stop.cancel();
        })
        .await;

        assert_eq!(ticks, vec![false]);
    }

    #[tokio::test]
    async fn test_cancelled_before_start_never_checks() {
        let server = spawn_mock_classifier(MockClassifier::default()).await;
        let api = client_for(&server.url);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut ticks = 0;
        poll_health(&api, Duration::from_millis(10), cancel, |_| ticks += 1).await;

        assert_eq!(ticks, 0);
        assert_eq!(server.health_calls(), 0);
    }
}
