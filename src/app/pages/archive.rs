use crate::app::components::{EmptyState, ErrorMessage, LoadingText, Pagination, PostCard};
use crate::app::pages::routes::Route;
use crate::domain::models::{compare_for_listing, PaginationParams};
use crate::shared::services::backend;
use dioxus::prelude::*;

const PAGE_SIZE: i64 = 10;

/// Posts filed under one category.
#[component]
pub fn CategoryPage(slug: String) -> Element {
    let mut page = use_signal(|| 0i64);

    let slug_for_fetch = slug.clone();
    let resource = use_resource(move || {
        let current_page = page();
        let slug = slug_for_fetch.clone();
        async move {
            let category = backend::category_by_slug(&slug).await?;
            let posts = backend::list_posts_by_category(
                category.id,
                &PaginationParams::new(current_page, PAGE_SIZE),
            )
            .await?;
            Ok::<_, String>((category, posts))
        }
    });

    match &*resource.read() {
        Some(Ok((category, result))) => {
            let mut posts = result.content.clone();
            posts.sort_by(compare_for_listing);
            let total_pages = result.total_pages;
            let description = category.description.clone().unwrap_or_default();

            rsx! {
                div { class: "c-archive",
                    header { class: "c-archive__header",
                        h1 { "📁 {category.name}" }
                        if !description.is_empty() {
                            p { class: "c-archive__description", "{description}" }
                        }
                        p { class: "c-archive__count", "{result.total_elements} posts" }
                    }

                    if posts.is_empty() {
                        EmptyState {
                            icon: "📭",
                            title: "Nothing here yet",
                            description: "No published posts in this category.",
                        }
                    } else {
                        for post in posts {
                            PostCard { key: "{post.id}", post }
                        }
                        Pagination {
                            current: page() + 1,
                            total_pages,
                            on_change: move |display_page: i64| page.set(display_page - 1),
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            ErrorMessage { message: "Could not load this category: {e}" }
        },
        None => rsx! {
            LoadingText { message: "Loading category..." }
        },
    }
}

/// Posts carrying one tag.
#[component]
pub fn TagPage(slug: String) -> Element {
    let mut page = use_signal(|| 0i64);

    let slug_for_fetch = slug.clone();
    let resource = use_resource(move || {
        let current_page = page();
        let slug = slug_for_fetch.clone();
        async move {
            let tag = backend::tag_by_slug(&slug).await?;
            let posts = backend::list_posts_by_tag(
                tag.id,
                &PaginationParams::new(current_page, PAGE_SIZE),
            )
            .await?;
            Ok::<_, String>((tag, posts))
        }
    });

    match &*resource.read() {
        Some(Ok((tag, result))) => {
            let mut posts = result.content.clone();
            posts.sort_by(compare_for_listing);
            let total_pages = result.total_pages;

            rsx! {
                div { class: "c-archive",
                    header { class: "c-archive__header",
                        h1 { "🏷️ {tag.name}" }
                        p { class: "c-archive__count", "{result.total_elements} posts" }
                    }

                    if posts.is_empty() {
                        EmptyState {
                            icon: "📭",
                            title: "Nothing here yet",
                            description: "No published posts carry this tag.",
                        }
                    } else {
                        for post in posts {
                            PostCard { key: "{post.id}", post }
                        }
                        Pagination {
                            current: page() + 1,
                            total_pages,
                            on_change: move |display_page: i64| page.set(display_page - 1),
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            ErrorMessage { message: "Could not load this tag: {e}" }
        },
        None => rsx! {
            LoadingText { message: "Loading tag..." }
        },
    }
}

/// Category overview grid.
#[component]
pub fn AllCategories() -> Element {
    let resource = use_resource(|| async { backend::all_categories().await });

    match &*resource.read() {
        Some(Ok(categories)) => {
            let mut categories = categories.clone();
            categories.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));

            rsx! {
                div { class: "c-archive",
                    header { class: "c-archive__header",
                        h1 { "📁 All categories" }
                    }
                    div { class: "c-category-grid",
                        for category in categories {
                            {
                                let count = category.post_count.unwrap_or(0);
                                rsx! {
                                    Link {
                                        key: "{category.id}",
                                        to: Route::CategoryPage { slug: category.slug.clone() },
                                        class: "c-category-card",
                                        h3 { class: "c-category-card__name", "{category.name}" }
                                        if let Some(description) = &category.description {
                                            p { class: "c-category-card__description", "{description}" }
                                        }
                                        span { class: "c-category-card__count", "{count} posts" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            ErrorMessage { message: "Could not load categories: {e}" }
        },
        None => rsx! {
            LoadingText { message: "Loading categories..." }
        },
    }
}
