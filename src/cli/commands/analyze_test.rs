use crate::analysis::AnalysisResult;
use crate::cli::api_client::ApiClient;
use crate::cli::commands::analyze::*;
use crate::cli::error::CliError;
use crate::config::ClientConfig;
use crate::state::AppState;
use crate::test_support::{
    MockClassifier, init_crypto, spawn_gateway, spawn_mock_classifier, unreachable_url,
};
use serde_json::{Value, json};
use std::time::Duration;

// =============================================================================
// Integration Tests - Test the analyze command against a mock classifier
// =============================================================================

fn client_for(url: &str) -> ApiClient {
    init_crypto();
    ApiClient::new(&ClientConfig::default().with_api_base(Some(url)))
}

#[tokio::test]
async fn test_analyze_table_output() {
    let server = spawn_mock_classifier(MockClassifier::default()).await;
    let api_client = client_for(&server.url);

    let output = analyze(&api_client, "Moon made of cheese, NASA confirms", "table")
        .await
        .unwrap();

    assert!(output.contains("Analysis Result"));
    assert!(output.contains("Fake News"));
    assert!(output.contains("Fake Probability"));
    assert!(output.contains("90%"));
    assert!(output.contains("6 words, 34 characters"));
    assert_eq!(server.health_calls(), 1);
    assert_eq!(server.predict_calls(), 1);
}

#[tokio::test]
async fn test_analyze_json_output_for_logit() {
    let server = spawn_mock_classifier(MockClassifier {
        prediction: "Real News",
        confidence: json!(2.2),
        ..MockClassifier::default()
    })
    .await;
    let api_client = client_for(&server.url);

    let output = analyze(&api_client, "Parliament passes budget", "json")
        .await
        .unwrap();
    let report: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(report["prediction"], "Real News");
    assert_eq!(report["verdict"], "real");
    assert_eq!(report["probability_label"], "Real Probability");
    assert_eq!(report["words"], 3);
    let fake = report["fake_probability"].as_f64().unwrap();
    let real = report["real_probability"].as_f64().unwrap();
    assert!((fake - 9.975).abs() < 0.01, "fake {fake}");
    assert!((fake + real - 100.0).abs() < 1e-9);
    assert!(report.get("error").is_none());
}

#[tokio::test]
async fn test_whitespace_input_makes_no_request() {
    let server = spawn_mock_classifier(MockClassifier::default()).await;
    let api_client = client_for(&server.url);

    let err = analyze(&api_client, "  \n\t ", "table").await.unwrap_err();

    assert!(matches!(err, CliError::EmptyInput));
    assert_eq!(server.health_calls(), 0);
    assert_eq!(server.predict_calls(), 0);
}

#[tokio::test]
async fn test_offline_backend_blocks_analysis() {
    let api_client = client_for(&unreachable_url().await);

    let err = analyze(&api_client, "Some headline", "table").await.unwrap_err();
    assert!(matches!(err, CliError::BackendDown { .. }), "{err:?}");
    assert_eq!(err.to_string(), "Server Down");
}

#[tokio::test]
async fn test_gateway_outage_blocks_analysis() {
    let gateway = spawn_gateway(&unreachable_url().await, Duration::from_secs(5)).await;
    let api_client = client_for(&gateway);

    let err = analyze(&api_client, "Some headline", "table").await.unwrap_err();
    assert!(matches!(err, CliError::BackendDown { .. }), "{err:?}");
}

#[tokio::test]
async fn test_non_json_reply_is_backend_unreachable() {
    let server = spawn_mock_classifier(MockClassifier {
        raw_predict_body: Some("upstream exploded"),
        ..MockClassifier::default()
    })
    .await;
    let api_client = client_for(&server.url);

    let err = analyze(&api_client, "Some headline", "json").await.unwrap_err();
    assert!(matches!(err, CliError::BackendUnreachable { .. }), "{err:?}");
    assert_eq!(err.to_string(), "Backend not reachable");
}

#[tokio::test]
async fn test_timeout_is_backend_unreachable() {
    let server = spawn_mock_classifier(MockClassifier {
        predict_delay: Duration::from_secs(5),
        ..MockClassifier::default()
    })
    .await;
    init_crypto();
    let api_client = ApiClient::new(
        &ClientConfig::default()
            .with_api_base(Some(&server.url))
            .with_request_timeout(Duration::from_millis(200)),
    );

    let err = analyze(&api_client, "Some headline", "table").await.unwrap_err();
    match err {
        CliError::BackendUnreachable { reason } => assert!(reason.contains("timed out"), "{reason}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_numeric_confidence_shows_even_split() {
    let server = spawn_mock_classifier(MockClassifier {
        prediction: "Real News",
        confidence: json!("n/a"),
        ..MockClassifier::default()
    })
    .await;
    let api_client = client_for(&server.url);

    let output = analyze(&api_client, "headline", "json").await.unwrap();
    let report: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["fake_probability"], 50.0);
    assert_eq!(report["real_probability"], 50.0);
}

#[tokio::test]
async fn test_unknown_format_rejected_before_network() {
    let server = spawn_mock_classifier(MockClassifier::default()).await;
    let api_client = client_for(&server.url);

    let err = analyze(&api_client, "headline", "yaml").await.unwrap_err();
    assert!(matches!(err, CliError::UnknownFormat(f) if f == "yaml"));
    assert_eq!(server.health_calls(), 0);
}

#[test]
fn test_format_card_shows_service_error() {
    let state = AppState {
        text: "   ".to_string(),
        ..AppState::default()
    };
    let result: AnalysisResult =
        serde_json::from_value(json!({"error": "No text provided"})).unwrap();

    let card = format_card(&state, &result);
    assert!(card.contains("Service Error"));
    assert!(card.contains("No text provided"));
    assert!(card.contains("Real Probability"));
    assert!(card.contains("50%"));
}

#[test]
fn test_format_card_truncates_long_text() {
    let state = AppState {
        text: "word ".repeat(40),
        ..AppState::default()
    };
    let card = format_card(&state, &AnalysisResult::new("Fake News", 0.7));
    assert!(card.contains("..."));
    assert!(card.contains("40 words, 200 characters"));
}
