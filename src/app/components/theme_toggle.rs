use crate::shared::hooks::{save_theme, use_theme};
use dioxus::prelude::*;

/// Day/night switch shown in the navbar. Persists the choice and applies
/// the root class immediately.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_theme();

    let toggle_theme = move |_| {
        let new_theme = current_theme().toggled();
        current_theme.set(new_theme);

        spawn(async move {
            crate::shared::hooks::use_theme::apply_theme_css(new_theme).await;
            save_theme(new_theme).await;
        });
    };

    let icon = current_theme().toggled().icon();
    let tooltip = format!("Switch to {} mode", current_theme().toggled().as_str());

    rsx! {
        button {
            class: "c-theme-toggle",
            "data-tooltip": "{tooltip}",
            aria_label: "Toggle light/dark mode",
            onclick: toggle_theme,
            "{icon}"
        }
    }
}
