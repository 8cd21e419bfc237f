use thiserror::Error;

/// Problems reading the session out of browser storage.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored user record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored user record is not a JSON object")]
    NotAnObject,
    #[error("browser storage unavailable")]
    StorageUnavailable,
}

/// Failures of calls against the portal REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("HTTP {status} – {text}")]
    Status { status: u16, text: String },
}
