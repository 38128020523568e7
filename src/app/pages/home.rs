use crate::app::components::{EmptyState, ErrorMessage, LoadingText, Pagination, PostCard};
use crate::app::pages::routes::Route;
use crate::domain::models::{compare_for_listing, PaginationParams, SearchParams};
use crate::shared::services::backend;
use dioxus::prelude::*;

const PAGE_SIZE: i64 = 10;

/// Landing page: latest posts with the category / tag side panel.
#[component]
pub fn Home() -> Element {
    let mut page = use_signal(|| 0i64);

    let posts_resource = use_resource(move || {
        let current_page = page();
        async move {
            backend::list_posts(
                &PaginationParams::new(current_page, PAGE_SIZE),
                &SearchParams::default(),
            )
            .await
        }
    });

    let categories_resource = use_resource(|| async { backend::all_categories().await });
    let tags_resource = use_resource(|| async { backend::all_tags().await });

    rsx! {
        div { class: "c-home",
            section { class: "c-home__posts",
                match &*posts_resource.read() {
                    Some(Ok(result)) => {
                        let mut posts = result.content.clone();
                        posts.sort_by(compare_for_listing);
                        let total_pages = result.total_pages;

                        rsx! {
                            if posts.is_empty() {
                                EmptyState {
                                    icon: "📭",
                                    title: "No posts yet",
                                    description: "Published posts will show up here.",
                                }
                            } else {
                                for post in posts {
                                    PostCard { key: "{post.id}", post }
                                }
                                Pagination {
                                    current: page() + 1,
                                    total_pages,
                                    on_change: move |display_page: i64| {
                                        page.set(display_page - 1);
                                    },
                                }
                            }
                        }
                    }
                    Some(Err(e)) => rsx! {
                        ErrorMessage { message: "Could not load posts: {e}" }
                    },
                    None => rsx! {
                        LoadingText { message: "Loading posts..." }
                    }
                }
            }

            aside { class: "c-home__sidebar",
                div { class: "c-side-panel",
                    h3 { class: "c-side-panel__title", "Categories" }
                    match &*categories_resource.read() {
                        Some(Ok(categories)) => {
                            // Busiest categories first, like the landing page
                            // has always shown them.
                            let mut categories = categories.clone();
                            categories.sort_by(|a, b| {
                                b.post_count.unwrap_or(0).cmp(&a.post_count.unwrap_or(0))
                            });

                            rsx! {
                                ul { class: "c-side-panel__list",
                                    for category in categories.into_iter().take(8) {
                                        {
                                            let count = category.post_count.unwrap_or(0);
                                            rsx! {
                                                li { key: "{category.id}",
                                                    Link {
                                                        to: Route::CategoryPage { slug: category.slug.clone() },
                                                        class: "c-side-panel__link",
                                                        "{category.name}"
                                                        span { class: "c-side-panel__count", "{count}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        Some(Err(_)) => rsx! {
                            p { class: "c-side-panel__muted", "Categories unavailable" }
                        },
                        None => rsx! {
                            p { class: "c-side-panel__muted", "Loading..." }
                        }
                    }
                }

                div { class: "c-side-panel",
                    h3 { class: "c-side-panel__title", "Tags" }
                    match &*tags_resource.read() {
                        Some(Ok(tags)) => rsx! {
                            div { class: "c-side-panel__cloud",
                                for tag in tags.iter() {
                                    Link {
                                        key: "{tag.id}",
                                        to: Route::TagPage { slug: tag.slug.clone() },
                                        class: "c-tag-chip",
                                        style: if let Some(color) = &tag.color {
                                            format!("--tag-color: {color};")
                                        } else {
                                            String::new()
                                        },
                                        "# {tag.name}"
                                    }
                                }
                            }
                        },
                        Some(Err(_)) => rsx! {
                            p { class: "c-side-panel__muted", "Tags unavailable" }
                        },
                        None => rsx! {
                            p { class: "c-side-panel__muted", "Loading..." }
                        }
                    }
                }
            }
        }
    }
}
