use crate::app::components::{EmptyState, ErrorMessage, LoadingText, Pagination, SearchForm};
use crate::app::pages::routes::Route;
use crate::domain::models::{PaginationParams, Post, PostStatus, SearchParams, Visibility};
use crate::shared::hooks::use_posts;
use crate::shared::services::backend;
use crate::shared::utils::date::format_date_short;
use dioxus::prelude::*;

/// Admin post table: search, pin toggle, edit and delete.
#[component]
pub fn AdminPostList() -> Element {
    let mut state = use_posts();
    // Row id awaiting delete confirmation.
    let mut confirm_delete = use_signal(|| None::<i64>);
    let mut action_error = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let page = (state.page)();
        let size = (state.page_size)();
        let keyword = (state.keyword)();
        async move {
            let search = SearchParams {
                keyword: if keyword.trim().is_empty() {
                    None
                } else {
                    Some(keyword)
                },
                ..Default::default()
            };
            backend::list_admin_posts(&PaginationParams::new(page, size), &search).await
        }
    });

    // Sync fetched pages into the shared listing state.
    use_effect(move || {
        let mut state = state;
        match &*resource.read() {
            Some(Ok(result)) => state.apply_page(result.clone()),
            Some(Err(e)) => state.set_error(e.clone()),
            None => state.start_loading(),
        }
    });

    let toggle_pin = move |post: Post| {
        let mut state = state;
        let next_pinned = !post.pinned;
        if next_pinned && post.status != PostStatus::Published {
            action_error.set(Some("Only published posts can be pinned".to_string()));
            return;
        }
        action_error.set(None);

        spawn(async move {
            let outcome = if next_pinned {
                backend::pin_post(post.id).await
            } else {
                backend::unpin_post(post.id).await
            };
            match outcome {
                Ok(()) => {
                    let pinned_at = next_pinned.then(|| chrono::Utc::now().to_rfc3339());
                    state.set_pinned(post.id, next_pinned, pinned_at);
                }
                Err(e) => {
                    tracing::error!("pin toggle failed: {e}");
                    action_error.set(Some("Pin update failed".to_string()));
                }
            }
        });
    };

    let delete_post = move |id: i64| {
        let mut state = state;
        spawn(async move {
            match backend::delete_post(id).await {
                Ok(()) => {
                    state.remove_post(id);
                    confirm_delete.set(None);
                }
                Err(e) => {
                    tracing::error!("delete failed: {e}");
                    action_error.set(Some("Delete failed".to_string()));
                    confirm_delete.set(None);
                }
            }
        });
    };

    let posts = (state.posts)();
    let loading = (state.loading)();
    let error = (state.error)();
    let total_pages = (state.total_pages)();

    rsx! {
        div { class: "c-admin-page",
            header { class: "c-admin-page__header",
                h1 { "📝 Posts" }
                Link {
                    to: Route::AdminPostNew {},
                    class: "c-button c-button--primary",
                    "＋ New post"
                }
            }

            SearchForm {
                placeholder: "Search all posts...",
                on_search: move |value: String| {
                    let mut state = state;
                    state.set_keyword(value);
                },
            }

            if let Some(message) = action_error() {
                ErrorMessage { message }
            }

            if loading {
                LoadingText { message: "Loading posts..." }
            } else if let Some(message) = error {
                ErrorMessage { message: "Could not load posts: {message}" }
            } else if posts.is_empty() {
                EmptyState {
                    icon: "📭",
                    title: "No posts",
                    description: "Create your first post to get started.",
                }
            } else {
                table { class: "c-admin-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Status" }
                            th { "Visibility" }
                            th { "Pinned" }
                            th { "Views" }
                            th { "Updated" }
                            th { "" }
                        }
                    }
                    tbody {
                        for post in posts {
                            AdminPostRow {
                                key: "{post.id}",
                                post: post.clone(),
                                confirming: confirm_delete() == Some(post.id),
                                on_toggle_pin: toggle_pin,
                                on_request_delete: move |id| confirm_delete.set(Some(id)),
                                on_cancel_delete: move |_| confirm_delete.set(None),
                                on_confirm_delete: delete_post,
                            }
                        }
                    }
                }

                Pagination {
                    current: (state.page)() + 1,
                    total_pages,
                    on_change: move |display_page: i64| {
                        let mut state = state;
                        state.set_page(display_page - 1, (state.page_size)());
                    },
                }
            }
        }
    }
}

#[component]
fn AdminPostRow(
    post: Post,
    confirming: bool,
    on_toggle_pin: EventHandler<Post>,
    on_request_delete: EventHandler<i64>,
    on_cancel_delete: EventHandler<i64>,
    on_confirm_delete: EventHandler<i64>,
) -> Element {
    let (status_class, status_text) = match post.status {
        PostStatus::Draft => ("c-badge c-badge--muted", "Draft"),
        PostStatus::Published => ("c-badge c-badge--success", "Published"),
    };
    let (visibility_class, visibility_text) = match post.visibility {
        Visibility::Public => ("c-badge c-badge--green", "Public"),
        Visibility::Password => ("c-badge c-badge--orange", "Password"),
    };

    let post_for_pin = post.clone();
    let post_id = post.id;
    let updated = format_date_short(&post.updated_at);

    rsx! {
        tr { class: "c-admin-table__row",
            td {
                Link {
                    to: Route::AdminPostEdit { id: post.id },
                    class: "c-admin-table__title",
                    "{post.title}"
                }
            }
            td { span { class: "{status_class}", "{status_text}" } }
            td { span { class: "{visibility_class}", "{visibility_text}" } }
            td {
                input {
                    r#type: "checkbox",
                    class: "c-admin-table__pin",
                    checked: post.pinned,
                    onchange: move |_| on_toggle_pin.call(post_for_pin.clone()),
                }
            }
            td { "{post.view_count}" }
            td { "{updated}" }
            td { class: "c-admin-table__actions",
                if confirming {
                    span { class: "c-admin-table__confirm", "Delete?" }
                    button {
                        class: "c-button c-button--danger",
                        onclick: move |_| on_confirm_delete.call(post_id),
                        "Yes"
                    }
                    button {
                        class: "c-button c-button--secondary",
                        onclick: move |_| on_cancel_delete.call(post_id),
                        "No"
                    }
                } else {
                    Link {
                        to: Route::PostDetail { slug: post.slug.clone() },
                        class: "c-button c-button--secondary",
                        "View"
                    }
                    button {
                        class: "c-button c-button--danger",
                        onclick: move |_| on_request_delete.call(post_id),
                        "🗑"
                    }
                }
            }
        }
    }
}
