use dioxus::prelude::*;
use std::str::FromStr;

/// Reading themes for the public site and back office.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Default theme for the visitor's system preference.
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            _ => Ok(Theme::Light),
        }
    }
}

/// Theme hook: restores the saved theme from localStorage on mount, falls
/// back to the system preference, and applies the matching root class.
pub fn use_theme() -> Signal<Theme> {
    let mut current_theme = use_signal(|| Theme::Light);

    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let mut restored = false;
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        if let Ok(Some(saved)) = storage.get_item("theme") {
                            if let Ok(theme) = saved.parse::<Theme>() {
                                current_theme.set(theme);
                                apply_theme_css(theme).await;
                                restored = true;
                            }
                        }
                    }
                }

                if !restored {
                    let script = r#"
                        window.matchMedia('(prefers-color-scheme: dark)').matches
                    "#;
                    if let Ok(result) = document::eval(script).await {
                        if let Some(is_dark) = result.as_bool() {
                            let system_theme = Theme::system_default(is_dark);
                            current_theme.set(system_theme);
                            apply_theme_css(system_theme).await;
                        }
                    }
                }
            }
        });
    });

    current_theme
}

/// Apply the theme class to the document root.
#[cfg(target_arch = "wasm32")]
pub async fn apply_theme_css(theme: Theme) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('light', 'dark');
            root.classList.add('{}');
        }})()
    "#,
        theme.as_str()
    );

    let _ = document::eval(&script).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn apply_theme_css(_theme: Theme) {
    // No-op on server
}

/// Persist the selection to localStorage.
#[cfg(target_arch = "wasm32")]
pub async fn save_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("theme", theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_theme(_theme: Theme) {
    // No-op on server
}
