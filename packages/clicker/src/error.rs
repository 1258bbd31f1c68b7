use thiserror::Error;

/// The single failure kind of a click.
///
/// Every variant is handled the same way by the controller: it is caught at the call site and
/// turned into a display string. The variants only exist so the string can say what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailed {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for RequestFailed {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            RequestFailed::Timeout(message)
        } else if err.is_decode() {
            RequestFailed::Decode(message)
        } else if let Some(status) = err.status() {
            RequestFailed::Status(status.as_u16())
        } else {
            #[cfg(not(target_arch = "wasm32"))]
            {
                if err.is_connect() {
                    return RequestFailed::Connect(message);
                }
            }

            RequestFailed::Request(message)
        }
    }
}

impl From<url::ParseError> for RequestFailed {
    fn from(err: url::ParseError) -> Self {
        RequestFailed::Request(format!("invalid endpoint url: {err}"))
    }
}

/// An error reading the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid server url {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid timeout {value:?}: expected a positive number of seconds")]
    InvalidTimeout { value: String },
}
