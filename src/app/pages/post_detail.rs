use crate::app::components::{ErrorMessage, LoadingText, MarkdownView};
use crate::app::pages::routes::Route;
use crate::shared::services::backend;
use crate::shared::utils::date::format_date;
use dioxus::prelude::*;

/// Post reading page. Password-protected posts show an unlock form until
/// the backend grants the access cookie.
#[component]
pub fn PostDetail(slug: String) -> Element {
    // Bumped after a successful password check to refetch with the cookie.
    let mut attempt = use_signal(|| 0u32);

    let slug_for_fetch = slug.clone();
    let post_resource = use_resource(move || {
        let _ = attempt();
        let slug = slug_for_fetch.clone();
        async move { backend::get_post_by_slug(&slug).await }
    });

    match &*post_resource.read() {
        Some(Ok(post)) => {
            let post = post.clone();
            // A protected post without its body means the access cookie is
            // missing; ask for the password.
            if post.is_password_protected() && post.content.is_empty() {
                let slug = slug.clone();
                return rsx! {
                    PasswordGate {
                        slug,
                        title: post.title.clone(),
                        on_unlocked: move |_| {
                            let next = attempt() + 1;
                            attempt.set(next);
                        },
                    }
                };
            }

            let published = post
                .published_at
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| format_date(&post.created_at));

            rsx! {
                article { class: "c-post-detail",
                    header { class: "c-post-detail__header",
                        if post.pinned {
                            span { class: "c-post-card__pin", "📌 Pinned" }
                        }
                        h1 { class: "c-post-detail__title", "{post.title}" }
                        div { class: "c-post-detail__meta",
                            span { "📅 {published}" }
                            span { "👁 {post.view_count}" }
                        }
                        div { class: "c-post-detail__tags",
                            for tag in post.tags.iter() {
                                Link {
                                    key: "{tag.id}",
                                    to: Route::TagPage { slug: tag.slug.clone() },
                                    class: "c-tag-chip",
                                    "# {tag.name}"
                                }
                            }
                        }
                    }

                    if let Some(cover) = &post.cover_image_url {
                        img {
                            class: "c-post-detail__cover",
                            src: "{cover}",
                            alt: "{post.title}",
                        }
                    }

                    MarkdownView { source: post.content.clone() }

                    footer { class: "c-post-detail__footer",
                        LikeButton { post_id: post.id, initial_count: post.like_count }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            div { class: "c-post-detail__error",
                ErrorMessage { message: "Could not load this post: {e}" }
                Link { to: Route::Home {}, class: "c-breadcrumb-link", "← Back to posts" }
            }
        },
        None => rsx! {
            LoadingText { message: "Loading post..." }
        },
    }
}

/// Password form for protected posts.
#[component]
fn PasswordGate(slug: String, title: String, on_unlocked: EventHandler<()>) -> Element {
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut verifying = use_signal(|| false);

    let submit = move |_| {
        let value = password.read().trim().to_string();
        if value.is_empty() {
            error.set(Some("Please enter the password".to_string()));
            return;
        }
        let slug = slug.clone();
        verifying.set(true);
        error.set(None);
        spawn(async move {
            match backend::verify_post_password(&slug, &value).await {
                Ok(()) => on_unlocked.call(()),
                Err(_) => {
                    error.set(Some("Wrong password".to_string()));
                }
            }
            verifying.set(false);
        });
    };

    rsx! {
        div { class: "c-password-gate",
            div { class: "c-password-gate__card",
                h2 { "🔒 {title}" }
                p { class: "c-password-gate__hint", "This post is password protected." }
                input {
                    r#type: "password",
                    class: "c-password-gate__input",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| {
                        password.set(evt.value());
                        error.set(None);
                    },
                }
                if let Some(message) = error() {
                    p { class: "c-password-gate__error", "{message}" }
                }
                button {
                    class: "c-button c-button--primary",
                    disabled: verifying(),
                    onclick: submit,
                    if verifying() { "Checking..." } else { "Unlock" }
                }
            }
        }
    }
}

/// Like toggle with optimistic count updates.
#[component]
fn LikeButton(post_id: i64, initial_count: i64) -> Element {
    let mut liked = use_signal(|| false);
    let mut count = use_signal(|| initial_count);

    // Restore the visitor's like state and the live count once on mount.
    use_effect(move || {
        spawn(async move {
            if let Ok(is_liked) = backend::is_post_liked(post_id).await {
                liked.set(is_liked);
            }
            if let Ok(current) = backend::like_count(post_id).await {
                count.set(current);
            }
        });
    });

    let toggle = move |_| {
        let was_liked = liked();
        // Optimistic flip; roll back if the request fails.
        liked.set(!was_liked);
        count.set(count() + if was_liked { -1 } else { 1 });
        spawn(async move {
            let outcome = if was_liked {
                backend::unlike_post(post_id).await
            } else {
                backend::like_post(post_id).await
            };
            if let Err(e) = outcome {
                tracing::warn!("like toggle failed: {e}");
                liked.set(was_liked);
                count.set(count() + if was_liked { 1 } else { -1 });
            }
        });
    };

    rsx! {
        button {
            class: if liked() { "c-like-button c-like-button--active" } else { "c-like-button" },
            onclick: toggle,
            if liked() { "❤️" } else { "🤍" }
            span { class: "c-like-button__count", "{count}" }
        }
    }
}
