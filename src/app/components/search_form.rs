use dioxus::prelude::*;
use keyboard_types::Key;

/// Keyword search input with submit on Enter or button click.
#[component]
pub fn SearchForm(
    #[props(default)] initial: String,
    placeholder: Option<String>,
    on_search: EventHandler<String>,
) -> Element {
    let mut query = use_signal(|| initial.clone());
    let placeholder = placeholder.unwrap_or_else(|| "Search posts...".to_string());

    let submit = move |_| {
        let value = query.read().trim().to_string();
        on_search.call(value);
    };

    rsx! {
        div { class: "c-search-form",
            input {
                r#type: "text",
                class: "c-search-form__input",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        let value = query.read().trim().to_string();
                        on_search.call(value);
                    }
                },
            }
            button {
                class: "c-search-form__button",
                onclick: submit,
                "🔍"
            }
        }
    }
}
