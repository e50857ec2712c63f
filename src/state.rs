//! Detector UI state and its reducer.
//!
//! Both the web UI and the CLI drive the same [`AppState`] through
//! [`reduce`]. The reducer never performs I/O; when an event calls for a
//! network request or a user-facing alert it returns an [`Effect`] and the
//! shell carries it out.

use crate::analysis::{AnalysisResult, Probabilities, ProbabilityDisplay, normalize};

/// Alert shown when an analysis request fails for any reason.
pub const BACKEND_UNREACHABLE: &str = "Backend not reachable";

pub const ANALYZE_LABEL: &str = "Analyze News";
pub const ANALYZING_LABEL: &str = "Analyzing...";
pub const OFFLINE_HINT: &str = "Backend is offline. Start the API server to analyze news.";

/// Immutable snapshot of everything the detector view renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub text: String,
    pub result: Option<AnalysisResult>,
    pub loading: bool,
    /// Starts offline until the first health check resolves.
    pub backend_online: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TextChanged(String),
    HealthChecked { online: bool },
    AnalyzeRequested,
    AnalyzeSucceeded(AnalysisResult),
    AnalyzeFailed { reason: String },
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue `POST /predict` with this text.
    SubmitAnalysis { text: String },
    /// Show a blocking alert to the user.
    Alert(String),
}

/// Apply `event` to `state`, returning the next snapshot and any effect.
pub fn reduce(state: &AppState, event: Event) -> (AppState, Effect) {
    let mut next = state.clone();

    let effect = match event {
        Event::TextChanged(text) => {
            next.text = text;
            Effect::None
        }
        Event::HealthChecked { online } => {
            next.backend_online = online;
            Effect::None
        }
        Event::AnalyzeRequested => {
            if next.text.trim().is_empty() || !next.can_analyze() {
                return (next, Effect::None);
            }
            next.loading = true;
            next.result = None;
            Effect::SubmitAnalysis {
                text: next.text.clone(),
            }
        }
        Event::AnalyzeSucceeded(result) => {
            // Completion for a request we are no longer waiting on
            if !next.loading {
                return (next, Effect::None);
            }
            next.loading = false;
            next.result = Some(result);
            Effect::None
        }
        Event::AnalyzeFailed { .. } => {
            if !next.loading {
                return (next, Effect::None);
            }
            next.loading = false;
            next.result = None;
            Effect::Alert(BACKEND_UNREACHABLE.to_string())
        }
    };

    (next, effect)
}

impl AppState {
    pub fn apply(&mut self, event: Event) -> Effect {
        let (next, effect) = reduce(self, event);
        *self = next;
        effect
    }

    /// Whether the action control is enabled.
    pub fn can_analyze(&self) -> bool {
        !self.loading && self.backend_online
    }

    pub fn button_disabled(&self) -> bool {
        !self.can_analyze()
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            ANALYZING_LABEL
        } else {
            ANALYZE_LABEL
        }
    }

    pub fn status_label(&self) -> &'static str {
        status_label(self.backend_online)
    }

    pub fn status_class(&self) -> &'static str {
        status_class(self.backend_online)
    }

    pub fn offline_hint(&self) -> Option<&'static str> {
        (!self.backend_online).then_some(OFFLINE_HINT)
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    pub fn char_count(&self) -> usize {
        char_count(&self.text)
    }

    pub fn probabilities(&self) -> Probabilities {
        normalize(self.result.as_ref())
    }

    pub fn probability_display(&self) -> Option<ProbabilityDisplay> {
        self.result.as_ref().map(ProbabilityDisplay::for_result)
    }
}

/// Admits one health probe at a time.
///
/// A poll tick that finds a probe still in flight is skipped, so a hung
/// backend cannot pile up requests and results land in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeGate {
    in_flight: bool,
}

impl ProbeGate {
    /// Claim the gate. Returns `false` when a probe is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

pub fn status_label(online: bool) -> &'static str {
    if online { "Server Online" } else { "Server Down" }
}

pub fn status_class(online: bool) -> &'static str {
    if online { "online" } else { "offline" }
}

/// Whitespace-separated word count of the trimmed text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length as a browser text area reports it (UTF-16 code units).
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}
