use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::analysis::{
    AnalysisResult, PredictRequest, UPSTREAM_STATUS_HEADER, is_upstream_unreachable,
};
use crate::cli::error::{CliError, CliResult};
use crate::config::ClientConfig;

/// HTTP client for the remote classifier
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    request_timeout: Duration,
    health_timeout: Duration,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base.clone(),
            request_timeout: config.request_timeout,
            health_timeout: config.health_timeout(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe.
    ///
    /// Any response, whatever its status, counts as up. Transport failures
    /// (refused, DNS, timeout) are errors, and so is a gateway reply marked
    /// with the upstream-unreachable header.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn check_health(&self) -> CliResult<()> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(self.health_timeout)
            .send()
            .await?;
        self.ensure_upstream_reachable(&response)?;
        debug!(status = %response.status(), "health check resolved");
        Ok(())
    }

    pub async fn is_online(&self) -> bool {
        match self.check_health().await {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "health check failed");
                false
            }
        }
    }

    /// Submit text for classification.
    ///
    /// The status code is not inspected: whatever JSON object the service
    /// answers with becomes the result. A gateway outage reply is an error.
    #[instrument(skip(self, text), fields(base_url = %self.base_url, chars = text.len()))]
    pub async fn predict(&self, text: &str) -> CliResult<AnalysisResult> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .timeout(self.request_timeout)
            .json(&PredictRequest {
                text: text.to_string(),
            })
            .send()
            .await?;
        self.ensure_upstream_reachable(&response)?;

        let status = response.status();
        let body = response.bytes().await?;
        let result: AnalysisResult = serde_json::from_slice(&body)?;

        if !status.is_success() {
            warn!(%status, error = ?result.error, "classifier returned an error status");
        }
        Ok(result)
    }

    fn ensure_upstream_reachable(&self, response: &reqwest::Response) -> CliResult<()> {
        let marker = response
            .headers()
            .get(UPSTREAM_STATUS_HEADER)
            .and_then(|v| v.to_str().ok());
        if is_upstream_unreachable(marker) {
            return Err(CliError::UpstreamUnreachable {
                url: self.base_url.clone(),
            });
        }
        Ok(())
    }
}
