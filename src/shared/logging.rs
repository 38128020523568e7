//! Structured logging for the server shell.
//!
//! Consistent operation names and fields so proxy traffic can be filtered
//! with an env-filter directive instead of grepping free text.

/// Server-side operations worth tracing.
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    RestProxy,
    StreamProxy,
    Startup,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::RestProxy => "rest_proxy",
            LogOperation::StreamProxy => "stream_proxy",
            LogOperation::Startup => "startup",
        }
    }
}

/// Log a forwarded REST request.
pub fn log_proxy_request(method: &str, path: &str) {
    tracing::debug!(
        operation = LogOperation::RestProxy.as_str(),
        method = method,
        path = path,
        "Forwarding request to backend"
    );
}

/// Log an upstream failure while proxying.
pub fn log_proxy_error(method: &str, path: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::RestProxy.as_str(),
        method = method,
        path = path,
        error = error,
        "Backend request failed"
    );
}

/// Log the start of a streamed (SSE) passthrough.
pub fn log_stream_proxy_start(path: &str) {
    tracing::info!(
        operation = LogOperation::StreamProxy.as_str(),
        path = path,
        "Streaming backend response to client"
    );
}

/// Log a mid-stream transport error; the client sees a truncated stream.
pub fn log_stream_proxy_error(path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::StreamProxy.as_str(),
        path = path,
        error = error,
        "Backend stream interrupted"
    );
}

/// Log resolved startup configuration.
pub fn log_startup(backend_url: &str) {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        backend_url = backend_url,
        "Server configured"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::RestProxy.as_str(), "rest_proxy");
        assert_eq!(LogOperation::StreamProxy.as_str(), "stream_proxy");
        assert_eq!(LogOperation::Startup.as_str(), "startup");
    }
}
