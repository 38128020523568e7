use crate::app::components::{Button, ButtonVariant};
use crate::domain::models::AiMode;
use crate::shared::hooks::use_ai_assistant;
use dioxus::prelude::*;

/// AI writing helper dialog.
///
/// Streams the summarize/polish result token by token into the result pane;
/// "Apply" hands the finished text back to the editor.
#[component]
pub fn AiDialog(
    open: Signal<bool>,
    initial_content: Signal<String>,
    on_apply: EventHandler<String>,
) -> Element {
    let mut assistant = use_ai_assistant();

    // Seed the input pane with the editor's current content each time the
    // dialog transitions to open.
    let mut was_open = use_signal(|| false);
    use_effect(move || {
        let is_open = open();
        if is_open && !*was_open.peek() {
            let seed = initial_content.peek().clone();
            assistant.input.set(seed);
        }
        was_open.set(is_open);
    });

    if !open() {
        return rsx! {};
    }

    let mode = *assistant.mode.read();
    let mode_name = mode.display_name();
    let is_streaming = *assistant.is_streaming.read();
    let result = assistant.result.read().clone();
    let error = assistant.error.read().clone();
    let has_result = !result.is_empty();

    let close = move |_| {
        assistant.reset();
        open.set(false);
    };

    rsx! {
        div { class: "c-dialog-overlay",
            div { class: "c-dialog c-dialog--wide",
                header { class: "c-dialog__header",
                    h2 { class: "c-dialog__title", "🤖 AI Assistant" }
                    span { class: "c-dialog__subtitle", "{mode_name}" }
                    button { class: "c-dialog__close", onclick: close, "✕" }
                }

                div { class: "c-dialog__body c-ai-dialog",
                    // Left column: input and options
                    section { class: "c-ai-dialog__input-panel",
                        label { class: "c-ai-dialog__label", "Mode" }
                        select {
                            class: "c-ai-dialog__select",
                            value: if mode == AiMode::Summarize { "summarize" } else { "polish" },
                            onchange: move |evt| {
                                let next = if evt.value() == "polish" {
                                    AiMode::Polish
                                } else {
                                    AiMode::Summarize
                                };
                                assistant.set_mode(next);
                            },
                            option { value: "summarize", "💡 Summarize" }
                            option { value: "polish", "✏️ Polish" }
                        }

                        if mode == AiMode::Summarize {
                            label { class: "c-ai-dialog__label", "Target length" }
                            select {
                                class: "c-ai-dialog__select",
                                value: "{assistant.length_hint}",
                                onchange: move |evt| {
                                    if let Ok(value) = evt.value().parse::<i32>() {
                                        assistant.length_hint.set(value);
                                    }
                                },
                                option { value: "100", "100 characters" }
                                option { value: "200", "200 characters" }
                                option { value: "300", "300 characters" }
                                option { value: "500", "500 characters" }
                            }
                        } else {
                            label { class: "c-ai-dialog__label", "Tone" }
                            select {
                                class: "c-ai-dialog__select",
                                value: "{assistant.tone}",
                                onchange: move |evt| assistant.tone.set(evt.value()),
                                option { value: "neutral", "Neutral" }
                                option { value: "friendly", "Friendly" }
                                option { value: "formal", "Formal" }
                                option { value: "enthusiastic", "Enthusiastic" }
                            }
                        }

                        label { class: "c-ai-dialog__label", "Text" }
                        textarea {
                            class: "c-ai-dialog__textarea",
                            rows: 10,
                            placeholder: if mode == AiMode::Summarize {
                                "Paste the content to summarize..."
                            } else {
                                "Paste the content to polish..."
                            },
                            value: "{assistant.input}",
                            oninput: move |evt| assistant.input.set(evt.value()),
                        }

                        div { class: "c-ai-dialog__actions",
                            Button {
                                disabled: assistant.input.read().trim().is_empty() || is_streaming,
                                onclick: move |_| assistant.run(),
                                if is_streaming { "Working..." } else { "Send" }
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| assistant.reset(),
                                "Reset"
                            }
                        }
                    }

                    // Right column: live result
                    section { class: "c-ai-dialog__result-panel",
                        div { class: "c-ai-dialog__result-header",
                            span { "Result" }
                            if has_result && !is_streaming {
                                div { class: "c-ai-dialog__result-actions",
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: move |_| {
                                            copy_to_clipboard(assistant.result.read().clone());
                                        },
                                        "Copy"
                                    }
                                    Button {
                                        onclick: move |_| {
                                            on_apply.call(assistant.result.read().clone());
                                            assistant.reset();
                                            open.set(false);
                                        },
                                        "Apply"
                                    }
                                }
                            }
                        }

                        if let Some(message) = error {
                            div { class: "c-ai-dialog__error", "⚠️ {message}" }
                        } else if has_result {
                            div { class: "c-ai-dialog__result u-whitespace-pre-wrap", "{result}" }
                        } else if is_streaming {
                            div { class: "c-ai-dialog__placeholder",
                                div { class: "c-loading__spinner" }
                                p { "The assistant is thinking..." }
                            }
                        } else {
                            div { class: "c-ai-dialog__placeholder",
                                p {
                                    if mode == AiMode::Summarize {
                                        "The assistant will produce a concise summary of your text."
                                    } else {
                                        "The assistant will rework wording and flow, keeping your meaning."
                                    }
                                }
                            }
                        }
                    }
                }

                footer { class: "c-ai-dialog__hint",
                    if mode == AiMode::Summarize {
                        "💡 Summaries work best on five hundred characters or more."
                    } else {
                        "💡 Polish rewrites for style; pick the tone that fits your post."
                    }
                }
            }
        }
    }
}

/// Copy text via the browser clipboard API.
fn copy_to_clipboard(text: String) {
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        {
            // JSON-encode to get a valid JS string literal.
            if let Ok(encoded) = serde_json::to_string(&text) {
                let script = format!("navigator.clipboard.writeText({encoded});");
                let _ = document::eval(&script).await;
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = text;
        }
    });
}
