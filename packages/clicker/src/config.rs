use crate::ConfigError;
use std::time::Duration;
use url::Url;

/// Where the counter endpoint lives when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// How long a click may stay in flight before it settles as a timeout.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// The environment variable holding the counter endpoint's base url.
pub const SERVER_URL_ENV: &str = "CLICKER_SERVER_URL";

/// The environment variable holding the click deadline in seconds.
pub const TIMEOUT_ENV: &str = "CLICKER_TIMEOUT_SECS";

/// What a failed click does to the result of the last successful one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResultOnError {
    /// Leave the last message and count on screen next to the error.
    #[default]
    KeepLastResult,

    /// Wipe the last message and count so only the error is shown.
    ClearResult,
}

/// Settings for talking to the counter endpoint.
///
/// This is built once by whoever launches the app and handed down explicitly. Nothing in this
/// crate reads it from a global.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub deadline: Duration,
    pub on_error: ResultOnError,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_SERVER_URL).expect("default server url is valid"))
    }
}

impl ClientConfig {
    /// Create a config pointing at the given endpoint, with the default deadline and error policy.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            deadline: DEFAULT_DEADLINE,
            on_error: ResultOnError::default(),
        }
    }

    /// Set how long a click may stay in flight.
    pub fn with_deadline(self, deadline: Duration) -> Self {
        Self { deadline, ..self }
    }

    /// Set what a failed click does to the previous result.
    pub fn with_result_on_error(self, on_error: ResultOnError) -> Self {
        Self { on_error, ..self }
    }

    /// Read the config from the process environment, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SERVER_URL_ENV) {
            config.base_url = Url::parse(value.trim())
                .map_err(|source| ConfigError::InvalidUrl { value, source })?;
        }

        if let Some(value) = lookup(TIMEOUT_ENV) {
            let secs = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs > 0.0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    value: value.clone(),
                })?;
            config.deadline = Duration::from_secs_f64(secs);
        }

        Ok(config)
    }

    /// Resolve a route like `/api/hello` against the base url.
    ///
    /// The base url's own path is kept, so a server mounted under `/counter/` gets
    /// `/counter/api/hello`.
    pub fn endpoint(&self, route: &str) -> Result<Url, url::ParseError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(route.trim_start_matches('/'))
    }
}
