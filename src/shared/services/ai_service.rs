//! Client for the AI writing-helper endpoints.
//!
//! The backend exposes non-streaming `/ai/summarize` + `/ai/polish` and
//! streaming `/ai/summarize/stream` + `/ai/polish/stream` variants; the
//! streaming ones answer `text/event-stream` and are consumed through
//! [`SseFrameReader`](crate::shared::utils::sse::SseFrameReader).

#[cfg(target_arch = "wasm32")]
use crate::domain::models::AiResponse;
#[cfg(target_arch = "wasm32")]
use crate::shared::errors::StreamError;

/// Resolve an endpoint the way callers are allowed to spell it: absolute
/// URLs and `/ai`-rooted paths pass through, other absolute paths are
/// mounted under `/ai`, bare names become `/ai/<name>`.
pub fn resolve_ai_path(endpoint: &str) -> String {
    if endpoint.starts_with("http") {
        endpoint.to_string()
    } else if endpoint.starts_with("/ai") {
        endpoint.to_string()
    } else if endpoint.starts_with('/') {
        format!("/ai{endpoint}")
    } else {
        format!("/ai/{endpoint}")
    }
}

/// POST `request` to an AI endpoint and hand every streamed payload to
/// `on_payload`, in arrival order, until the stream ends or fails.
///
/// Fails fast on a non-success status before reading the body. An
/// `event: error` frame aborts the stream with its payload as the message;
/// payloads delivered before the failure stand. Retry policy (if any)
/// belongs to the caller.
#[cfg(target_arch = "wasm32")]
pub async fn stream_ai_response<B, F>(
    endpoint: &str,
    request: &B,
    mut on_payload: F,
) -> Result<(), StreamError>
where
    B: serde::Serialize,
    F: FnMut(String),
{
    use crate::shared::utils::sse::SseFrameReader;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let path = resolve_ai_path(endpoint);
    let body = serde_json::to_string(request)
        .map_err(|e| StreamError::Transport(format!("failed to serialize request: {e}")))?;

    let window =
        web_sys::window().ok_or_else(|| StreamError::Transport("no window object".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let fetch_request = Request::new_with_str_and_init(&path, &opts)
        .map_err(|e| StreamError::Transport(format!("failed to create request: {e:?}")))?;
    fetch_request
        .headers()
        .set("Content-Type", "application/json; charset=utf-8")
        .and_then(|_| fetch_request.headers().set("Accept", "text/event-stream"))
        .map_err(|e| StreamError::Transport(format!("failed to set headers: {e:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|e| StreamError::Transport(format!("fetch failed: {e:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| StreamError::Transport("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(StreamError::Status(response.status()));
    }

    let response_body = response
        .body()
        .ok_or_else(|| StreamError::Transport("response has no body".to_string()))?;
    let stream_reader = response_body
        .get_reader()
        .dyn_into::<web_sys::ReadableStreamDefaultReader>()
        .map_err(|_| StreamError::Transport("body reader unavailable".to_string()))?;

    let mut frames = SseFrameReader::new();
    loop {
        let result = JsFuture::from(stream_reader.read())
            .await
            .map_err(|e| StreamError::Transport(format!("error reading stream: {e:?}")))?;

        let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
            .unwrap_or(JsValue::TRUE)
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }

        let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Uint8Array>().ok());
        if let Some(chunk) = value {
            // An error frame returns Err here; dropping the reader cancels
            // the fetch, so no further chunks are consumed.
            frames.feed(&chunk.to_vec(), &mut on_payload)?;
        }
    }

    frames.finish(&mut on_payload)
}

/// Non-streaming summary.
#[cfg(target_arch = "wasm32")]
pub async fn summarize(content: &str, length_hint: Option<i32>) -> AiResponse {
    let request = crate::domain::models::SummarizeRequest {
        content: content.to_string(),
        length_hint,
    };
    post_ai("/summarize", &request).await
}

/// Non-streaming polish pass.
#[cfg(target_arch = "wasm32")]
pub async fn polish(content: &str, tone: Option<String>) -> AiResponse {
    let request = crate::domain::models::PolishRequest {
        content: content.to_string(),
        tone,
    };
    post_ai("/polish", &request).await
}

#[cfg(target_arch = "wasm32")]
async fn post_ai<B: serde::Serialize>(endpoint: &str, request: &B) -> AiResponse {
    use reqwasm::http::Request;

    let path = resolve_ai_path(endpoint);
    let body = match serde_json::to_string(request) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("failed to serialize AI request: {e}");
            return AiResponse {
                result: String::new(),
                success: false,
                message: Some("invalid request".to_string()),
            };
        }
    };

    let sent = Request::post(&path)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await;

    match sent {
        Ok(response) if response.ok() => match response.json::<serde_json::Value>().await {
            Ok(value) => AiResponse::coerce(value),
            Err(e) => {
                tracing::error!("failed to decode AI response: {e}");
                AiResponse {
                    result: String::new(),
                    success: false,
                    message: Some("unreadable AI response".to_string()),
                }
            }
        },
        Ok(response) => {
            tracing::error!("AI endpoint answered {}", response.status());
            AiResponse {
                result: String::new(),
                success: false,
                message: Some(format!("AI service unavailable ({})", response.status())),
            }
        }
        Err(e) => {
            tracing::error!("AI request failed: {e}");
            AiResponse {
                result: String::new(),
                success: false,
                message: Some("AI service unreachable".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_ai_path("https://example.com/ai/x"),
            "https://example.com/ai/x"
        );
    }

    #[test]
    fn ai_rooted_paths_pass_through() {
        assert_eq!(resolve_ai_path("/ai/polish/stream"), "/ai/polish/stream");
    }

    #[test]
    fn other_absolute_paths_are_mounted_under_ai() {
        assert_eq!(resolve_ai_path("/summarize/stream"), "/ai/summarize/stream");
    }

    #[test]
    fn bare_names_get_prefix_and_separator() {
        assert_eq!(resolve_ai_path("polish"), "/ai/polish");
    }
}
