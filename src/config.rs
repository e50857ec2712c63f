//! Client configuration: where the classifier lives and how often to poll it.

use std::env;
use std::time::Duration;

/// Environment variable overriding the classifier base URL.
pub const API_URL_ENV: &str = "VERDICT_API_URL";

/// Base URL used by development builds and the CLI.
pub const DEV_API_BASE: &str = "http://127.0.0.1:10000";

/// Same-origin prefix used by release builds of the web UI.
pub const PROD_API_BASE: &str = "/api";

pub const HEALTH_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn default_api_base(&self) -> &'static str {
        match self {
            BuildMode::Development => DEV_API_BASE,
            BuildMode::Production => PROD_API_BASE,
        }
    }
}

/// Pick the classifier base URL.
///
/// A non-empty override wins; otherwise the build-mode default is used.
/// Trailing slashes are dropped so paths can be appended directly.
pub fn resolve_api_base(override_url: Option<&str>, mode: BuildMode) -> String {
    let base = override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| mode.default_api_base());

    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        // "/" alone means the site root
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Settings shared by the health poller and the analysis requester.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub health_interval: Duration,
    /// Upper bound on a single request before it is treated as failed.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEV_API_BASE.to_string(),
            health_interval: HEALTH_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Native configuration: `VERDICT_API_URL` if set, else [`DEV_API_BASE`].
    pub fn from_env() -> Self {
        let api_url = env::var(API_URL_ENV).ok();
        Self {
            api_base: resolve_api_base(api_url.as_deref(), BuildMode::Development),
            ..Self::default()
        }
    }

    /// Web configuration: the URL baked in at compile time, else the
    /// build-mode default.
    pub fn for_web() -> Self {
        Self {
            api_base: resolve_api_base(option_env!("VERDICT_API_URL"), BuildMode::current()),
            ..Self::default()
        }
    }

    /// Explicit base URL (e.g. from a CLI flag). `None` keeps the current one.
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(url) = api_base.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base = resolve_api_base(Some(url), BuildMode::Development);
        }
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_health_interval(mut self, interval: Duration) -> Self {
        self.health_interval = interval;
        self
    }

    /// Bound on a single health check. A probe never outlives its period.
    pub fn health_timeout(&self) -> Duration {
        self.request_timeout.min(self.health_interval)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base)
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_base)
    }
}
