use crate::app::components::ThemeToggle;
use crate::app::pages::routes::Route;
use dioxus::prelude::*;

/// Public site navbar: logo, section links, theme toggle.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                "✈️ blog-air"
            }

            div { class: "c-navbar__links",
                Link { to: Route::Home {}, class: "c-navbar__link", "Posts" }
                Link { to: Route::AllCategories {}, class: "c-navbar__link", "Categories" }
                Link { to: Route::SearchPage {}, class: "c-navbar__link", "Search" }
            }

            div { class: "c-navbar__actions",
                ThemeToggle {}
            }
        }
    }
}
