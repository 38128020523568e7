use crate::app::components::{ErrorMessage, LoadingText};
use crate::app::pages::routes::Route;
use crate::shared::services::backend;
use dioxus::prelude::*;

/// Back-office landing: post counts and shortcuts.
#[component]
pub fn AdminDashboard() -> Element {
    let stats_resource = use_resource(|| async { backend::post_stats().await });

    rsx! {
        div { class: "c-admin-page",
            header { class: "c-admin-page__header",
                h1 { "📊 Dashboard" }
            }

            match &*stats_resource.read() {
                Some(Ok(stats)) => rsx! {
                    div { class: "c-stat-grid",
                        div { class: "c-stat-card",
                            span { class: "c-stat-card__value", "{stats.total_posts}" }
                            span { class: "c-stat-card__label", "Total posts" }
                        }
                        div { class: "c-stat-card",
                            span { class: "c-stat-card__value", "{stats.published_posts}" }
                            span { class: "c-stat-card__label", "Published" }
                        }
                        div { class: "c-stat-card",
                            span { class: "c-stat-card__value", "{stats.draft_posts}" }
                            span { class: "c-stat-card__label", "Drafts" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    ErrorMessage { message: "Could not load statistics: {e}" }
                },
                None => rsx! {
                    LoadingText { message: "Loading statistics..." }
                }
            }

            div { class: "c-admin-shortcuts",
                Link {
                    to: Route::AdminPostNew {},
                    class: "c-button c-button--primary",
                    "＋ New post"
                }
                Link {
                    to: Route::AdminPostList {},
                    class: "c-button c-button--secondary",
                    "Manage posts"
                }
            }
        }
    }
}
