//! Upstream proxy for the blog backend.
//!
//! The browser only ever talks same-origin; everything under `/api` and
//! `/ai` is forwarded to the backend. SSE responses are passed through as a
//! raw byte stream so AI frames reach the client as they are produced.

use axum::{
    body::Body,
    extract::{Extension, Request},
    http::StatusCode,
    response::Response,
};
use futures::TryStreamExt;
use reqwest::Client;

use crate::shared::logging;

/// Request bodies larger than this are rejected before forwarding; covers
/// the 5 MB image upload limit with headroom.
const MAX_PROXY_BODY: usize = 10 * 1024 * 1024;

/// Proxy configuration
#[derive(Clone)]
pub struct ProxyConfig {
    pub backend_url: String,
    pub client: Client,
}

impl ProxyConfig {
    pub fn new(backend_url: String) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Read the backend URL from `BLOG_BACKEND_URL` (default
    /// `http://localhost:8080`).
    pub fn from_env() -> anyhow::Result<Self> {
        let url = std::env::var("BLOG_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("BLOG_BACKEND_URL must be an http(s) URL, got {url}");
        }
        Ok(Self::new(url))
    }
}

/// ANY /api/{*path} and /ai/{*path}
/// Forward the request to the blog backend and stream the answer back.
pub async fn backend_proxy_handler(
    Extension(config): Extension<ProxyConfig>,
    req: Request,
) -> Result<Response, StatusCode> {
    let (parts, body) = req.into_parts();

    let method = reqwest::Method::from_bytes(parts.method.as_str().as_bytes())
        .map_err(|_| StatusCode::METHOD_NOT_ALLOWED)?;
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());
    let url = format!("{}{}", config.backend_url, path_and_query);

    logging::log_proxy_request(parts.method.as_str(), &path_and_query);

    let mut upstream = config.client.request(method, &url);
    // Forward content negotiation and the auth/password cookies; hop-by-hop
    // headers stay behind.
    for name in ["content-type", "accept", "cookie"] {
        if let Some(value) = parts.headers.get(name) {
            upstream = upstream.header(name, value.clone());
        }
    }

    let body_bytes = axum::body::to_bytes(body, MAX_PROXY_BODY)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;
    if !body_bytes.is_empty() {
        upstream = upstream.body(body_bytes);
    }

    let response = upstream.send().await.map_err(|e| {
        logging::log_proxy_error(parts.method.as_str(), &path_and_query, &e.to_string());
        StatusCode::BAD_GATEWAY
    })?;

    let status = response.status();
    let headers = response.headers().clone();

    let is_event_stream = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/event-stream"))
        .unwrap_or(false);
    if is_event_stream {
        logging::log_stream_proxy_start(&path_and_query);
    }

    let stream_path = path_and_query.clone();
    let body_stream = response
        .bytes_stream()
        .inspect_err(move |err| logging::log_stream_proxy_error(&stream_path, &err.to_string()));

    let mut builder = Response::builder().status(status);
    for (key, value) in headers.iter() {
        let key_str = key.as_str();
        if key_str != "content-length" && key_str != "transfer-encoding" && key_str != "connection"
        {
            builder = builder.header(key, value);
        }
    }

    builder.body(Body::from_stream(body_stream)).map_err(|e| {
        tracing::error!("Failed to build streaming response: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
