//! Classification result model and probability normalization.
//!
//! The remote classifier returns a `confidence` whose scale is not part of
//! any contract: depending on the model it is a probability in `[0, 1]`, a
//! percentage, or a raw decision-function value (logit). [`normalize`]
//! reconciles all of these into a fake/real percentage pair that agrees with
//! the returned label.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label the classifier uses for a fake verdict. Anything else counts as real.
pub const FAKE_NEWS_LABEL: &str = "Fake News";

const MIN_FAKE_PROBABILITY: f64 = 0.01;
const MAX_FAKE_PROBABILITY: f64 = 99.99;

/// Response header the `serve` gateway sets on replies it generated itself
/// because the classifier behind it could not be reached.
pub const UPSTREAM_STATUS_HEADER: &str = "x-verdict-upstream";
pub const UPSTREAM_UNREACHABLE: &str = "unreachable";

/// Whether an [`UPSTREAM_STATUS_HEADER`] value marks a classifier outage.
///
/// Such a response resolved at the HTTP level but must be handled like a
/// transport failure.
pub fn is_upstream_unreachable(header_value: Option<&str>) -> bool {
    header_value.is_some_and(|v| v.trim().eq_ignore_ascii_case(UPSTREAM_UNREACHABLE))
}

/// Body sent to `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    pub text: String,
}

/// Response from `POST /predict`.
///
/// Deserialization is lenient: no field is required, and
/// `confidence` is kept as the raw JSON value so that malformed payloads
/// fall through to the even split instead of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub prediction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Value>,
    /// Error message reported by the service (e.g. `"No text provided"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn new(prediction: impl Into<String>, confidence: impl Into<Value>) -> Self {
        Self {
            prediction: prediction.into(),
            confidence: Some(confidence.into()),
            error: None,
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.prediction == FAKE_NEWS_LABEL {
            Verdict::Fake
        } else {
            Verdict::Real
        }
    }

    /// Numeric confidence, if the service sent one.
    ///
    /// Numbers and numeric strings are accepted; `null`, booleans, arrays,
    /// objects, unparseable strings and NaN yield `None`. `null`, `false`
    /// and `""` are never coerced to `0`, so they give the even split.
    pub fn raw_confidence(&self) -> Option<f64> {
        let value = match self.confidence.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        (!value.is_nan()).then_some(value)
    }

    pub fn probabilities(&self) -> Probabilities {
        normalize(Some(self))
    }

    pub fn probability_display(&self) -> ProbabilityDisplay {
        ProbabilityDisplay::for_result(self)
    }
}

/// Which side of the fake/real divide a result falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Fake,
    Real,
}

impl Verdict {
    /// CSS class used by the result card.
    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Fake => "fake",
            Verdict::Real => "real",
        }
    }

    pub fn probability_label(&self) -> &'static str {
        match self {
            Verdict::Fake => "Fake Probability",
            Verdict::Real => "Real Probability",
        }
    }
}

/// Fake/real percentages. Both lie in `[0, 100]` and sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probabilities {
    pub fake: f64,
    pub real: f64,
}

impl Probabilities {
    pub const EVEN: Probabilities = Probabilities {
        fake: 50.0,
        real: 50.0,
    };

    fn from_fake(fake: f64) -> Self {
        Self {
            fake,
            real: 100.0 - fake,
        }
    }
}

impl Default for Probabilities {
    fn default() -> Self {
        Self::EVEN
    }
}

/// Standard logistic function, `1 / (1 + e^-x)`.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Fake-news percentage implied by a raw confidence, before the label is
/// taken into account.
///
/// Values in `[0, 1]` are read as a probability; anything else is read as a
/// logit.
pub fn raw_fake_probability(confidence: f64) -> f64 {
    if (0.0..=1.0).contains(&confidence) {
        confidence * 100.0
    } else {
        logistic(confidence) * 100.0
    }
}

/// Derive a label-consistent fake/real split from a classifier result.
pub fn normalize(result: Option<&AnalysisResult>) -> Probabilities {
    let Some(result) = result else {
        return Probabilities::EVEN;
    };
    let Some(confidence) = result.raw_confidence() else {
        return Probabilities::EVEN;
    };

    let mut fake = raw_fake_probability(confidence);

    match result.verdict() {
        Verdict::Fake if fake < 50.0 => fake = 100.0 - fake,
        Verdict::Real if fake > 50.0 => fake = 100.0 - fake,
        _ => {}
    }

    Probabilities::from_fake(fake.clamp(MIN_FAKE_PROBABILITY, MAX_FAKE_PROBABILITY))
}

/// The single probability figure shown on the result card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityDisplay {
    pub label: &'static str,
    pub value: f64,
}

impl ProbabilityDisplay {
    pub fn for_result(result: &AnalysisResult) -> Self {
        let verdict = result.verdict();
        let probabilities = result.probabilities();
        let value = match verdict {
            Verdict::Fake => probabilities.fake,
            Verdict::Real => probabilities.real,
        };
        Self {
            label: verdict.probability_label(),
            value,
        }
    }

    /// Whole-percent text, e.g. `"90%"`. Halves round up.
    pub fn formatted_value(&self) -> String {
        format!("{:.0}%", self.value.round())
    }
}

impl fmt::Display for ProbabilityDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted_value())
    }
}
