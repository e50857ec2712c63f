//! Forwarding handlers for the classifier endpoints.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{instrument, warn};

use super::GatewayState;
use crate::analysis::{UPSTREAM_STATUS_HEADER, UPSTREAM_UNREACHABLE};

/// `GET /api/health` → `GET {upstream}/health`
#[instrument(skip(state), fields(upstream = %state.upstream()))]
pub async fn health(State(state): State<GatewayState>) -> Response {
    let outcome = state
        .client
        .get(state.upstream_url("/health"))
        .timeout(state.request_timeout)
        .send()
        .await;

    match outcome {
        Ok(response) => relay(response).await,
        Err(e) => upstream_failure(e),
    }
}

/// `POST /api/predict` → `POST {upstream}/predict`, body passed through as-is.
#[instrument(skip(state, body), fields(upstream = %state.upstream(), bytes = body.len()))]
pub async fn predict(State(state): State<GatewayState>, body: Bytes) -> Response {
    let outcome = state
        .client
        .post(state.upstream_url("/predict"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .timeout(state.request_timeout)
        .body(body)
        .send()
        .await;

    match outcome {
        Ok(response) => relay(response).await,
        Err(e) => upstream_failure(e),
    }
}

/// Copy status, content type and body of an upstream response.
async fn relay(response: reqwest::Response) -> Response {
    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return upstream_failure(e),
    };

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}

/// Reply generated by the gateway itself. The marker header tells clients
/// that the classifier is down even though this response resolved.
fn upstream_failure(e: reqwest::Error) -> Response {
    warn!(error = %e, "classifier request failed");
    let status = if e.is_timeout() {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        StatusCode::BAD_GATEWAY
    };
    (
        status,
        [(UPSTREAM_STATUS_HEADER, UPSTREAM_UNREACHABLE)],
        Json(json!({ "error": format!("classifier unavailable: {}", e) })),
    )
        .into_response()
}
