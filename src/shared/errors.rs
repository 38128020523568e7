use thiserror::Error;

/// Errors raised while consuming a streamed AI response.
///
/// Every variant terminates the stream: nothing is retried here, the
/// caller decides what (if anything) to show the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StreamError {
    /// The endpoint answered with a non-success status before any data
    /// was read.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The server emitted an `event: error` frame; the frame's payload is
    /// carried as the message.
    #[error("{0}")]
    ErrorEvent(String),

    /// The byte stream is not valid UTF-8 (a split multi-byte character is
    /// not an error - it is carried to the next chunk).
    #[error("invalid UTF-8 in stream at byte offset {0}")]
    Decode(usize),

    /// Fetch/transport-level failure (network down, aborted, no body).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors raised by the REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[cfg(target_arch = "wasm32")]
impl From<reqwasm::Error> for ApiError {
    fn from(err: reqwasm::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
