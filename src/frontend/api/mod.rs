use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_net::http::{Request, Response};
use leptos::logging::warn;
use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};
use serde::{Deserialize, Serialize};
use verdict::analysis::{
    AnalysisResult, PredictRequest, UPSTREAM_STATUS_HEADER, is_upstream_unreachable,
};
use verdict::config::ClientConfig;
use web_sys::{AbortController, AbortSignal};

/// API client error type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApiClientError {
    Network(String),
    Timeout,
    Deserialization(String),
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiClientError::Timeout => write!(f, "Request timed out"),
            ApiClientError::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

type Result<T> = std::result::Result<T, ApiClientError>;

/// Aborts a fetch once the configured timeout elapses.
struct RequestTimeout {
    controller: AbortController,
    timed_out: Rc<Cell<bool>>,
    handle: Option<TimeoutHandle>,
}

impl RequestTimeout {
    fn start(timeout: Duration) -> Result<Self> {
        let controller =
            AbortController::new().map_err(|e| ApiClientError::Network(format!("{:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));

        let handle = {
            let timed_out = Rc::clone(&timed_out);
            let controller = controller.clone();
            set_timeout_with_handle(
                move || {
                    timed_out.set(true);
                    controller.abort();
                },
                timeout,
            )
        };
        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("could not arm request timeout, request is unbounded: {:?}", e);
                None
            }
        };

        Ok(Self {
            controller,
            timed_out,
            handle,
        })
    }

    fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    /// Disarm the timer; failures caused by the abort become `Timeout`.
    fn finish<T>(self, outcome: Result<T>) -> Result<T> {
        if let Some(handle) = self.handle {
            handle.clear();
        }
        match outcome {
            Err(_) if self.timed_out.get() => Err(ApiClientError::Timeout),
            other => other,
        }
    }
}

/// The `serve` gateway answers for a dead classifier with a marked reply.
fn ensure_upstream_reachable(response: &Response) -> Result<()> {
    let marker = response.headers().get(UPSTREAM_STATUS_HEADER);
    if is_upstream_unreachable(marker.as_deref()) {
        return Err(ApiClientError::Network(
            "classifier behind the gateway is unreachable".to_string(),
        ));
    }
    Ok(())
}

/// Liveness probe. Any response means the backend is up, except a gateway
/// reply marked as an upstream outage.
///
/// Bounded by `config.health_timeout()`.
pub async fn check_health(config: &ClientConfig) -> Result<()> {
    let timeout = RequestTimeout::start(config.health_timeout())?;
    let signal = timeout.signal();

    let outcome = match Request::get(&config.health_url())
        .abort_signal(Some(&signal))
        .send()
        .await
    {
        Ok(response) => ensure_upstream_reachable(&response),
        Err(e) => Err(ApiClientError::Network(e.to_string())),
    };

    timeout.finish(outcome)
}

/// Submit text for classification.
///
/// The fetch is aborted once `config.request_timeout` elapses. The status
/// code is not inspected; any JSON object becomes the result, unless the
/// gateway marked the reply as an upstream outage.
pub async fn predict(config: &ClientConfig, text: &str) -> Result<AnalysisResult> {
    let timeout = RequestTimeout::start(config.request_timeout)?;
    let signal = timeout.signal();

    let request = Request::post(&config.predict_url())
        .abort_signal(Some(&signal))
        .json(&PredictRequest {
            text: text.to_string(),
        })
        .map_err(|e| ApiClientError::Deserialization(e.to_string()))?;

    let outcome = match request.send().await {
        Ok(response) => match ensure_upstream_reachable(&response) {
            Ok(()) => response
                .json::<AnalysisResult>()
                .await
                .map_err(|e| ApiClientError::Deserialization(e.to_string())),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiClientError::Network(e.to_string())),
    };

    timeout.finish(outcome)
}
