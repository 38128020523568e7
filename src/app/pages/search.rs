use crate::app::components::{EmptyState, ErrorMessage, LoadingText, Pagination, PostCard, SearchForm};
use crate::domain::models::{compare_for_listing, PaginationParams, SearchParams};
use crate::shared::services::backend;
use dioxus::prelude::*;

const PAGE_SIZE: i64 = 10;

/// Keyword search over published posts.
#[component]
pub fn SearchPage() -> Element {
    let mut keyword = use_signal(String::new);
    let mut page = use_signal(|| 0i64);

    let resource = use_resource(move || {
        let current_keyword = keyword();
        let current_page = page();
        async move {
            if current_keyword.trim().is_empty() {
                return Ok(None);
            }
            let search = SearchParams {
                keyword: Some(current_keyword),
                ..Default::default()
            };
            backend::list_posts(&PaginationParams::new(current_page, PAGE_SIZE), &search)
                .await
                .map(Some)
        }
    });

    rsx! {
        div { class: "c-search-page",
            header { class: "c-search-page__header",
                h1 { "🔍 Search" }
                SearchForm {
                    placeholder: "Search by title or content...",
                    on_search: move |value: String| {
                        page.set(0);
                        keyword.set(value);
                    },
                }
            }

            match &*resource.read() {
                Some(Ok(Some(result))) => {
                    let mut posts = result.content.clone();
                    posts.sort_by(compare_for_listing);
                    let total_pages = result.total_pages;

                    rsx! {
                        p { class: "c-search-page__summary",
                            "{result.total_elements} results for \"{keyword}\""
                        }
                        if posts.is_empty() {
                            EmptyState {
                                icon: "🕳️",
                                title: "No matches",
                                description: "Try different keywords.",
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
                Some(Ok(None)) => rsx! {
                    p { class: "c-search-page__hint", "Type a keyword to search the blog." }
                },
                Some(Err(e)) => rsx! {
                    ErrorMessage { message: "Search failed: {e}" }
                },
                None => rsx! {
                    LoadingText { message: "Searching..." }
                }
            }
        }
    }
}
