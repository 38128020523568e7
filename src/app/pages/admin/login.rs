use crate::app::pages::routes::Route;
use crate::shared::hooks::use_auth;
use dioxus::prelude::*;
use keyboard_types::Key;

/// Back-office password gate.
#[component]
pub fn AdminLogin() -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();
    let mut password = use_signal(String::new);

    use_effect(move || {
        if *auth.is_authenticated.read() {
            navigator.replace(Route::AdminDashboard {});
        }
    });

    let mut submit = move || {
        let value = password.read().trim().to_string();
        if !value.is_empty() {
            auth.login(value);
        }
    };

    let verifying = *auth.verifying.read();
    let error = auth.error.read().clone();

    rsx! {
        div { class: "c-admin-login",
            div { class: "c-admin-login__card",
                h1 { class: "c-admin-login__title", "✈️ blog-air" }
                p { class: "c-admin-login__subtitle", "Administrator access" }

                input {
                    r#type: "password",
                    class: "c-admin-login__input",
                    placeholder: "Admin password",
                    value: "{password}",
                    autofocus: true,
                    oninput: move |evt| password.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }

                if let Some(message) = error {
                    p { class: "c-admin-login__error", "{message}" }
                }

                button {
                    class: "c-button c-button--primary c-admin-login__button",
                    disabled: verifying || password.read().trim().is_empty(),
                    onclick: move |_| submit(),
                    if verifying { "Checking..." } else { "Sign in" }
                }

                Link {
                    to: Route::Home {},
                    class: "c-breadcrumb-link",
                    "← Back to the site"
                }
            }
        }
    }
}
