//! In-process stand-in for the remote classifier, used by client and
//! gateway tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::analysis::PredictRequest;
use crate::server::{GatewayState, create_router};

/// Canned behaviour for the mock classifier.
#[derive(Clone)]
pub struct MockClassifier {
    pub prediction: &'static str,
    pub confidence: Value,
    /// Status returned by `/health`; the check only cares that it resolves.
    pub health_status: StatusCode,
    /// Raw body returned by `/predict` instead of the JSON verdict.
    pub raw_predict_body: Option<&'static str>,
    /// Delay before `/predict` answers.
    pub predict_delay: Duration,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self {
            prediction: "Fake News",
            confidence: json!(0.9),
            health_status: StatusCode::OK,
            raw_predict_body: None,
            predict_delay: Duration::ZERO,
        }
    }
}

#[derive(Clone)]
struct MockState {
    classifier: MockClassifier,
    health_calls: Arc<AtomicUsize>,
    predict_calls: Arc<AtomicUsize>,
}

pub struct MockServer {
    pub url: String,
    health_calls: Arc<AtomicUsize>,
    predict_calls: Arc<AtomicUsize>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockServer {
    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }
}

async fn health(State(state): State<MockState>) -> Response {
    state.health_calls.fetch_add(1, Ordering::SeqCst);
    (state.classifier.health_status, Json(json!({"status": "ok"}))).into_response()
}

async fn predict(State(state): State<MockState>, Json(request): Json<PredictRequest>) -> Response {
    state.predict_calls.fetch_add(1, Ordering::SeqCst);

    if !state.classifier.predict_delay.is_zero() {
        tokio::time::sleep(state.classifier.predict_delay).await;
    }

    if let Some(body) = state.classifier.raw_predict_body {
        return (StatusCode::OK, body).into_response();
    }

    if request.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No text provided"})),
        )
            .into_response();
    }

    Json(json!({
        "prediction": state.classifier.prediction,
        "confidence": state.classifier.confidence,
    }))
    .into_response()
}

/// Spawn the mock classifier on an ephemeral port.
pub async fn spawn_mock_classifier(classifier: MockClassifier) -> MockServer {
    let health_calls = Arc::new(AtomicUsize::new(0));
    let predict_calls = Arc::new(AtomicUsize::new(0));

    let state = MockState {
        classifier,
        health_calls: Arc::clone(&health_calls),
        predict_calls: Arc::clone(&predict_calls),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        url: format!("http://{}", addr),
        health_calls,
        predict_calls,
        _handle: handle,
    }
}

/// Serve the gateway on an ephemeral port. Returns its `/api` base URL.
pub async fn spawn_gateway(upstream: &str, request_timeout: Duration) -> String {
    init_crypto();
    let app = create_router(GatewayState::new(upstream, request_timeout));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// URL of a port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
