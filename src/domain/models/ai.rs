use serde::{Deserialize, Serialize};

/// What the writing helper is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    Summarize,
    Polish,
}

impl AiMode {
    pub fn stream_endpoint(&self) -> &'static str {
        match self {
            AiMode::Summarize => "/summarize/stream",
            AiMode::Polish => "/polish/stream",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AiMode::Summarize => "Summarize",
            AiMode::Polish => "Polish",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_hint: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolishRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

/// Normalized non-streaming AI answer. The backend answers either
/// `{result, success, message}` or the wrapped `{success, data, message}`;
/// both coerce into this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub result: String,
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AiResponse {
    /// Coerce whatever shape the backend answered with.
    pub fn coerce(value: serde_json::Value) -> AiResponse {
        if let Some(obj) = value.as_object() {
            if obj.contains_key("result") {
                return AiResponse {
                    result: obj
                        .get("result")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    success: obj.get("success").and_then(|v| v.as_bool()).unwrap_or(true),
                    message: obj
                        .get("message")
                        .and_then(|v| v.as_str())
                        .map(String::from),
                };
            }
            if obj.contains_key("data") {
                return AiResponse {
                    result: obj
                        .get("data")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    success: obj.get("success").and_then(|v| v.as_bool()).unwrap_or(true),
                    message: obj
                        .get("message")
                        .and_then(|v| v.as_str())
                        .map(String::from),
                };
            }
        }
        match value {
            serde_json::Value::Null => AiResponse {
                result: String::new(),
                success: true,
                message: None,
            },
            serde_json::Value::String(s) => AiResponse {
                result: s,
                success: true,
                message: None,
            },
            other => AiResponse {
                result: other.to_string(),
                success: true,
                message: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_result_shape() {
        let resp = AiResponse::coerce(json!({"result": "short", "success": true}));
        assert_eq!(resp.result, "short");
        assert!(resp.success);
    }

    #[test]
    fn coerces_wrapped_data_shape() {
        let resp = AiResponse::coerce(json!({
            "success": false,
            "data": "text",
            "message": "quota exceeded"
        }));
        assert_eq!(resp.result, "text");
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn coerces_bare_string_and_null() {
        assert_eq!(AiResponse::coerce(json!("plain")).result, "plain");
        let null = AiResponse::coerce(serde_json::Value::Null);
        assert_eq!(null.result, "");
        assert!(null.success);
    }
}
