use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tracing::warn;

use crate::analysis::{AnalysisResult, Verdict};
use crate::cli::api_client::ApiClient;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, format_percent, single_line, truncate_with_ellipsis};
use crate::state::{AppState, Effect, Event};

/// Machine-readable analysis output
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub prediction: String,
    pub verdict: Verdict,
    pub confidence: Option<Value>,
    pub fake_probability: f64,
    pub real_probability: f64,
    pub probability_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub words: usize,
    pub characters: usize,
}

impl AnalysisReport {
    fn new(state: &AppState, result: &AnalysisResult) -> Self {
        let probabilities = result.probabilities();
        Self {
            prediction: result.prediction.clone(),
            verdict: result.verdict(),
            confidence: result.confidence.clone(),
            fake_probability: probabilities.fake,
            real_probability: probabilities.real,
            probability_label: result.verdict().probability_label(),
            error: result.error.clone(),
            words: state.word_count(),
            characters: state.char_count(),
        }
    }
}

/// Classify `text` and render the verdict.
///
/// Follows the same flow as the web UI: blank text never reaches the
/// network, the classifier must answer a health check before the request is
/// sent, and any request failure is reported as "Backend not reachable".
pub async fn analyze(api_client: &ApiClient, text: &str, format: &str) -> CliResult<String> {
    if !matches!(format, "table" | "json") {
        return Err(CliError::UnknownFormat(format.to_string()));
    }

    let mut state = AppState::default();
    state.apply(Event::TextChanged(text.to_string()));

    if text.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }

    let online = api_client.is_online().await;
    state.apply(Event::HealthChecked { online });

    let Effect::SubmitAnalysis { text } = state.apply(Event::AnalyzeRequested) else {
        return Err(CliError::BackendDown {
            url: api_client.base_url().to_string(),
        });
    };

    let event = match api_client.predict(&text).await {
        Ok(result) => Event::AnalyzeSucceeded(result),
        Err(e) => {
            warn!(error = %e, "analysis request failed");
            Event::AnalyzeFailed {
                reason: e.to_string(),
            }
        }
    };
    let reason = match &event {
        Event::AnalyzeFailed { reason } => reason.clone(),
        _ => String::new(),
    };

    if let Effect::Alert(_) = state.apply(event) {
        return Err(CliError::BackendUnreachable { reason });
    }

    let Some(result) = state.result.as_ref() else {
        return Err(CliError::BackendUnreachable { reason });
    };

    match format {
        "json" => {
            let report = AnalysisReport::new(&state, result);
            Ok(serde_json::to_string_pretty(&report)?)
        }
        _ => Ok(format_card(&state, result)),
    }
}

/// Terminal rendition of the result card
pub(crate) fn format_card(state: &AppState, result: &AnalysisResult) -> String {
    let probabilities = result.probabilities();
    let display = result.probability_display();

    let mut builder = Builder::default();
    builder.push_record(["Analysis Result", result.prediction.as_str()]);
    builder.push_record([display.label.to_string(), display.formatted_value()]);
    let split = format!(
        "{} / {}",
        format_percent(probabilities.fake),
        format_percent(probabilities.real)
    );
    builder.push_record(["Fake / Real", split.as_str()]);
    if let Some(error) = &result.error {
        builder.push_record(["Service Error", error.as_str()]);
    }
    builder.push_record([
        "Input".to_string(),
        format!("{} words, {} characters", state.word_count(), state.char_count()),
    ]);
    builder.push_record([
        "Text".to_string(),
        truncate_with_ellipsis(&single_line(&state.text), 60),
    ]);

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}
