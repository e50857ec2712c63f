use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Server Down")]
    #[diagnostic(
        code(verdict::cli::backend_down),
        help(
            "No response from {url}. Is the classifier running?\nSet VERDICT_API_URL or pass --api-url to point at the right server."
        )
    )]
    BackendDown { url: String },

    #[error("Backend not reachable")]
    #[diagnostic(
        code(verdict::cli::backend_unreachable),
        help("The analysis request failed: {reason}")
    )]
    BackendUnreachable { reason: String },

    #[error("Classifier behind the gateway is unreachable")]
    #[diagnostic(
        code(verdict::cli::upstream_unreachable),
        help("{url} answered, but the classifier it forwards to did not.")
    )]
    UpstreamUnreachable { url: String },

    #[error("Request to classifier failed")]
    #[diagnostic(code(verdict::cli::request_failed))]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to classifier timed out")]
    #[diagnostic(
        code(verdict::cli::timeout),
        help("Raise the limit with --timeout-secs if the classifier is slow to answer.")
    )]
    TimedOut {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from classifier: {message}")]
    #[diagnostic(
        code(verdict::cli::invalid_response),
        help("The classifier did not answer with a JSON object.")
    )]
    InvalidResponse { message: String },

    #[error("Nothing to analyze")]
    #[diagnostic(
        code(verdict::cli::empty_input),
        help("Pass the article text as an argument, with --file, or on stdin.")
    )]
    EmptyInput,

    #[error("Failed to read input: {0}")]
    #[diagnostic(code(verdict::cli::io))]
    Io(#[from] std::io::Error),

    #[error("Unknown output format: {0}")]
    #[diagnostic(code(verdict::cli::format), help("Use 'table' or 'json'."))]
    UnknownFormat(String),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CliError::TimedOut { source: e }
        } else if e.is_decode() {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        } else {
            CliError::RequestFailed { source: e }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
