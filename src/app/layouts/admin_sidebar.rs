use crate::app::pages::routes::Route;
use crate::shared::hooks::AuthState;
use dioxus::prelude::*;

/// Back-office navigation sidebar.
#[component]
pub fn AdminSidebar(auth: AuthState) -> Element {
    let mut auth = auth;
    let navigator = use_navigator();

    rsx! {
        aside { class: "c-admin-sidebar",
            div { class: "c-admin-sidebar__brand", "✈️ Back office" }

            nav { class: "c-admin-sidebar__nav",
                Link {
                    to: Route::AdminDashboard {},
                    class: "c-admin-sidebar__item",
                    span { class: "c-admin-sidebar__icon", "📊" }
                    span { "Dashboard" }
                }
                Link {
                    to: Route::AdminPostList {},
                    class: "c-admin-sidebar__item",
                    span { class: "c-admin-sidebar__icon", "📝" }
                    span { "Posts" }
                }
                Link {
                    to: Route::AdminCategoryList {},
                    class: "c-admin-sidebar__item",
                    span { class: "c-admin-sidebar__icon", "📁" }
                    span { "Categories" }
                }
                Link {
                    to: Route::AdminTagList {},
                    class: "c-admin-sidebar__item",
                    span { class: "c-admin-sidebar__icon", "🏷️" }
                    span { "Tags" }
                }
            }

            div { class: "c-admin-sidebar__footer",
                Link {
                    to: Route::Home {},
                    class: "c-admin-sidebar__item",
                    span { class: "c-admin-sidebar__icon", "🌐" }
                    span { "View site" }
                }
                button {
                    class: "c-admin-sidebar__item c-admin-sidebar__logout",
                    onclick: move |_| {
                        auth.logout();
                        navigator.push(Route::AdminLogin {});
                    },
                    span { class: "c-admin-sidebar__icon", "🚪" }
                    span { "Log out" }
                }
            }
        }
    }
}
