use thiserror::Error;

/// NetworkError-class failures from the remote service.
///
/// The data merger recovers from every variant by degrading to local-only data
/// and flagging a warning; none of them is fatal to a render.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("unexpected payload from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl ApiError {
    pub fn url(&self) -> &str {
        match self {
            ApiError::Transport { url, .. }
            | ApiError::Status { url, .. }
            | ApiError::Decode { url, .. } => url,
        }
    }
}
