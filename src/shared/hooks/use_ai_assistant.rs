use crate::domain::models::AiMode;
use dioxus::prelude::*;
use uuid::Uuid;

/// State for the AI writing-helper dialog: one summarize/polish run at a
/// time, with the streamed result accumulating live in `result`.
#[derive(Clone, Copy, PartialEq)]
pub struct AiAssistantState {
    pub mode: Signal<AiMode>,
    pub input: Signal<String>,
    pub result: Signal<String>,
    pub is_streaming: Signal<bool>,
    pub error: Signal<Option<String>>,
    /// Target length for summaries, in characters.
    pub length_hint: Signal<i32>,
    /// Requested tone for polish runs.
    pub tone: Signal<String>,
    /// Identifies the in-flight run so a stale stream can't write into a
    /// newer one's result.
    current_request: Signal<Option<String>>,
}

impl AiAssistantState {
    pub fn set_mode(&mut self, mode: AiMode) {
        self.mode.set(mode);
        self.result.set(String::new());
        self.error.set(None);
    }

    pub fn reset(&mut self) {
        self.input.set(String::new());
        self.result.set(String::new());
        self.error.set(None);
        self.is_streaming.set(false);
        self.current_request.set(None);
    }

    /// Kick off a streaming run for the current mode and input.
    pub fn run(&mut self) {
        let input = self.input.read().trim().to_string();
        if input.is_empty() || *self.is_streaming.read() {
            return;
        }

        let request_id = Uuid::new_v4().to_string();
        self.current_request.set(Some(request_id.clone()));
        self.result.set(String::new());
        self.error.set(None);
        self.is_streaming.set(true);

        let mode = *self.mode.read();
        let length_hint = *self.length_hint.read();
        let tone = self.tone.read().clone();
        let state = *self;

        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use crate::domain::models::{PolishRequest, SummarizeRequest};
                use crate::shared::services::ai_service::stream_ai_response;

                let mut result_signal = state.result;
                let current = state.current_request;
                let guard_id = request_id.clone();
                let on_payload = move |payload: String| {
                    if current.read().as_deref() == Some(guard_id.as_str()) {
                        result_signal.write().push_str(&payload);
                    }
                };

                let outcome = match mode {
                    AiMode::Summarize => {
                        let request = SummarizeRequest {
                            content: input,
                            length_hint: Some(length_hint),
                        };
                        stream_ai_response(mode.stream_endpoint(), &request, on_payload).await
                    }
                    AiMode::Polish => {
                        let request = PolishRequest {
                            content: input,
                            tone: Some(tone),
                        };
                        stream_ai_response(mode.stream_endpoint(), &request, on_payload).await
                    }
                };

                let mut state = state;
                if state.current_request.read().as_deref() == Some(request_id.as_str()) {
                    if let Err(e) = outcome {
                        tracing::error!("AI stream failed: {e}");
                        state.error.set(Some(e.to_string()));
                    }
                    state.is_streaming.set(false);
                    state.current_request.set(None);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (mode, length_hint, tone, input, request_id);
                let mut state = state;
                state.is_streaming.set(false);
            }
        });
    }
}

/// Hook constructing the AI assistant dialog state.
pub fn use_ai_assistant() -> AiAssistantState {
    let mode = use_signal(|| AiMode::Summarize);
    let input = use_signal(String::new);
    let result = use_signal(String::new);
    let is_streaming = use_signal(|| false);
    let error = use_signal(|| None::<String>);
    let length_hint = use_signal(|| 200i32);
    let tone = use_signal(|| "neutral".to_string());
    let current_request = use_signal(|| None::<String>);

    AiAssistantState {
        mode,
        input,
        result,
        is_streaming,
        error,
        length_hint,
        tone,
        current_request,
    }
}
