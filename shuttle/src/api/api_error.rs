#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("failed to reach the shuttle backend at {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    /// the backend rejected the request. `detail` is the backend's own message.
    #[error("{detail}")]
    Backend {
        endpoint: String,
        status: u16,
        detail: String,
    },
    #[error("malformed response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: String,
        source: serde_json::Error,
    },
    #[error("invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
    #[error("invalid backend url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    ClientBuildError(reqwest::Error),
}

impl ApiError {
    /// HTTP status reported by the backend, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}
