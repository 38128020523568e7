use crate::app::components::{AiDialog, ErrorMessage, LoadingText};
use crate::app::pages::routes::Route;
use crate::domain::models::{
    ContentType, Post, PostCreateRequest, PostStatus, PostUpdateRequest, Visibility,
};
use crate::shared::services::backend;
use crate::shared::utils::text::{extract_excerpt, generate_slug};
use dioxus::prelude::*;
use std::collections::HashSet;

#[cfg(target_arch = "wasm32")]
use crate::app::components::CoverImageUpload;

// Stub for server-side rendering; the real picker needs the browser file
// APIs.
#[cfg(not(target_arch = "wasm32"))]
#[component]
fn CoverImageUpload(
    #[props(default)] current_url: Option<String>,
    on_uploaded: EventHandler<String>,
) -> Element {
    let _ = (current_url, on_uploaded);
    rsx! {
        div { class: "c-image-upload c-image-upload--placeholder",
            "📷 Image upload (requires client-side JavaScript)"
        }
    }
}

/// Create a new post.
#[component]
pub fn AdminPostNew() -> Element {
    rsx! {
        PostForm {}
    }
}

/// Edit an existing post.
#[component]
pub fn AdminPostEdit(id: i64) -> Element {
    let resource = use_resource(move || async move { backend::get_post_by_id(id).await });

    match &*resource.read() {
        Some(Ok(post)) => rsx! {
            PostForm { existing: Some(post.clone()) }
        },
        Some(Err(e)) => rsx! {
            ErrorMessage { message: "Could not load the post: {e}" }
        },
        None => rsx! {
            LoadingText { message: "Loading post..." }
        },
    }
}

/// Shared create/edit form. `existing` switches between POST and PUT on
/// submit.
#[component]
fn PostForm(#[props(default)] existing: Option<Post>) -> Element {
    let editing_id = existing.as_ref().map(|p| p.id);

    let mut title = use_signal(|| existing.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let mut slug = use_signal(|| existing.as_ref().map(|p| p.slug.clone()).unwrap_or_default());
    // Manual slug edits stop the title from regenerating it.
    let mut slug_dirty = use_signal(|| existing.is_some());
    let mut excerpt = use_signal(|| {
        existing
            .as_ref()
            .and_then(|p| p.excerpt.clone())
            .unwrap_or_default()
    });
    let mut content =
        use_signal(|| existing.as_ref().map(|p| p.content.clone()).unwrap_or_default());
    let mut status = use_signal(|| {
        existing
            .as_ref()
            .map(|p| p.status)
            .unwrap_or(PostStatus::Draft)
    });
    let mut visibility = use_signal(|| {
        existing
            .as_ref()
            .map(|p| p.visibility)
            .unwrap_or(Visibility::Public)
    });
    let mut password = use_signal(String::new);
    let mut category_id = use_signal(|| existing.as_ref().and_then(|p| p.category_id));
    let mut cover_image_url = use_signal(|| existing.as_ref().and_then(|p| p.cover_image_url.clone()));
    let mut selected_tags: Signal<HashSet<i64>> = use_signal(|| {
        existing
            .as_ref()
            .map(|p| p.tags.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    });

    let mut ai_open = use_signal(|| false);
    let mut generating_excerpt = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);
    let navigator = use_navigator();

    let categories_resource = use_resource(|| async { backend::all_categories().await });
    let tags_resource = use_resource(|| async { backend::all_tags().await });

    let submit = move |_| {
        let title_value = title.read().trim().to_string();
        let content_value = content.read().clone();
        if title_value.is_empty() || content_value.trim().is_empty() {
            form_error.set(Some("Title and content are required".to_string()));
            return;
        }
        if *visibility.read() == Visibility::Password
            && editing_id.is_none()
            && password.read().trim().is_empty()
        {
            form_error.set(Some("A password is required for protected posts".to_string()));
            return;
        }

        let slug_value = {
            let raw = slug.read().trim().to_string();
            if raw.is_empty() {
                generate_slug(&title_value)
            } else {
                raw
            }
        };
        let excerpt_value = excerpt.read().trim().to_string();
        let password_value = password.read().trim().to_string();
        let tag_ids: Vec<i64> = selected_tags.read().iter().copied().collect();

        saving.set(true);
        form_error.set(None);

        spawn(async move {
            let outcome = match editing_id {
                Some(id) => {
                    let request = PostUpdateRequest {
                        title: Some(title_value),
                        slug: Some(slug_value),
                        excerpt: (!excerpt_value.is_empty()).then_some(excerpt_value),
                        content: Some(content_value),
                        content_type: Some(ContentType::Markdown),
                        status: Some(*status.read()),
                        visibility: Some(*visibility.read()),
                        password: (!password_value.is_empty()).then_some(password_value),
                        category_id: *category_id.read(),
                        cover_image_url: cover_image_url.read().clone(),
                        tag_ids: Some(tag_ids),
                    };
                    backend::update_post(id, &request).await.map(|_| ())
                }
                None => {
                    let request = PostCreateRequest {
                        title: title_value,
                        slug: Some(slug_value),
                        excerpt: (!excerpt_value.is_empty()).then_some(excerpt_value),
                        content: content_value,
                        content_type: Some(ContentType::Markdown),
                        status: Some(*status.read()),
                        visibility: Some(*visibility.read()),
                        password: (!password_value.is_empty()).then_some(password_value),
                        category_id: *category_id.read(),
                        cover_image_url: cover_image_url.read().clone(),
                        tag_ids: Some(tag_ids),
                    };
                    backend::create_post(&request).await.map(|_| ())
                }
            };

            match outcome {
                Ok(()) => {
                    navigator.push(Route::AdminPostList {});
                }
                Err(e) => {
                    tracing::error!("saving post failed: {e}");
                    form_error.set(Some("Saving failed, please retry".to_string()));
                    saving.set(false);
                }
            }
        });
    };

    let heading = if editing_id.is_some() {
        "✏️ Edit post"
    } else {
        "＋ New post"
    };

    rsx! {
        div { class: "c-admin-page c-post-form",
            header { class: "c-admin-page__header",
                h1 { "{heading}" }
                Link {
                    to: Route::AdminPostList {},
                    class: "c-breadcrumb-link",
                    "← Back to posts"
                }
            }

            if let Some(message) = form_error() {
                ErrorMessage { message }
            }

            div { class: "c-post-form__grid",
                // Main column
                div { class: "c-post-form__main",
                    label { class: "c-post-form__label", "Title" }
                    input {
                        r#type: "text",
                        class: "c-post-form__input",
                        value: "{title}",
                        oninput: move |evt| {
                            let value = evt.value();
                            if !*slug_dirty.read() {
                                slug.set(generate_slug(&value));
                            }
                            title.set(value);
                        },
                    }

                    label { class: "c-post-form__label", "Slug" }
                    input {
                        r#type: "text",
                        class: "c-post-form__input",
                        value: "{slug}",
                        oninput: move |evt| {
                            slug_dirty.set(true);
                            slug.set(evt.value());
                        },
                    }

                    div { class: "c-post-form__label-row",
                        label { class: "c-post-form__label", "Content (Markdown)" }
                        button {
                            class: "c-button c-button--secondary",
                            disabled: content.read().trim().is_empty(),
                            onclick: move |_| ai_open.set(true),
                            "🤖 AI Assistant"
                        }
                    }
                    textarea {
                        class: "c-post-form__textarea c-post-form__textarea--content",
                        rows: 18,
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }

                    div { class: "c-post-form__label-row",
                        label { class: "c-post-form__label", "Excerpt" }
                        div { class: "c-post-form__label-actions",
                            button {
                                class: "c-button c-button--secondary",
                                disabled: content.read().trim().is_empty(),
                                onclick: move |_| {
                                    excerpt.set(extract_excerpt(&content.read(), 150));
                                },
                                "Generate from content"
                            }
                            button {
                                class: "c-button c-button--secondary",
                                disabled: content.read().trim().is_empty() || generating_excerpt(),
                                onclick: move |_| {
                                    generating_excerpt.set(true);
                                    spawn(async move {
                                        #[cfg(target_arch = "wasm32")]
                                        {
                                            let text = content.peek().clone();
                                            let response =
                                                crate::shared::services::ai_service::summarize(
                                                    &text,
                                                    Some(150),
                                                )
                                                .await;
                                            if response.success && !response.result.is_empty() {
                                                excerpt.set(response.result);
                                            } else {
                                                form_error.set(Some(response.message.unwrap_or_else(
                                                    || "AI summary failed".to_string(),
                                                )));
                                            }
                                        }
                                        generating_excerpt.set(false);
                                    });
                                },
                                if generating_excerpt() { "Summarizing..." } else { "🤖 AI summary" }
                            }
                        }
                    }
                    textarea {
                        class: "c-post-form__textarea",
                        rows: 3,
                        value: "{excerpt}",
                        oninput: move |evt| excerpt.set(evt.value()),
                    }
                }

                // Side column
                aside { class: "c-post-form__side",
                    label { class: "c-post-form__label", "Status" }
                    select {
                        class: "c-post-form__select",
                        value: if *status.read() == PostStatus::Published { "PUBLISHED" } else { "DRAFT" },
                        onchange: move |evt| {
                            status.set(if evt.value() == "PUBLISHED" {
                                PostStatus::Published
                            } else {
                                PostStatus::Draft
                            });
                        },
                        option { value: "DRAFT", "Draft" }
                        option { value: "PUBLISHED", "Published" }
                    }

                    label { class: "c-post-form__label", "Visibility" }
                    select {
                        class: "c-post-form__select",
                        value: if *visibility.read() == Visibility::Password { "PASSWORD" } else { "PUBLIC" },
                        onchange: move |evt| {
                            visibility.set(if evt.value() == "PASSWORD" {
                                Visibility::Password
                            } else {
                                Visibility::Public
                            });
                        },
                        option { value: "PUBLIC", "Public" }
                        option { value: "PASSWORD", "Password protected" }
                    }

                    if *visibility.read() == Visibility::Password {
                        label { class: "c-post-form__label", "Password" }
                        input {
                            r#type: "password",
                            class: "c-post-form__input",
                            placeholder: if editing_id.is_some() { "Leave empty to keep current" } else { "Post password" },
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    label { class: "c-post-form__label", "Category" }
                    match &*categories_resource.read() {
                        Some(Ok(categories)) => rsx! {
                            select {
                                class: "c-post-form__select",
                                value: (*category_id.read()).map(|id| id.to_string()).unwrap_or_default(),
                                onchange: move |evt| {
                                    category_id.set(evt.value().parse::<i64>().ok());
                                },
                                option { value: "", "— None —" }
                                for category in categories.iter() {
                                    option {
                                        key: "{category.id}",
                                        value: "{category.id}",
                                        "{category.name}"
                                    }
                                }
                            }
                        },
                        _ => rsx! {
                            p { class: "c-post-form__muted", "Loading categories..." }
                        }
                    }

                    label { class: "c-post-form__label", "Tags" }
                    match &*tags_resource.read() {
                        Some(Ok(tags)) => rsx! {
                            div { class: "c-post-form__tags",
                                for tag in tags.iter() {
                                    {
                                        let tag_id = tag.id;
                                        let checked = selected_tags.read().contains(&tag_id);
                                        rsx! {
                                            label {
                                                key: "{tag_id}",
                                                class: "c-post-form__tag-option",
                                                input {
                                                    r#type: "checkbox",
                                                    checked,
                                                    onchange: move |_| {
                                                        let mut tags = selected_tags.write();
                                                        if tags.contains(&tag_id) {
                                                            tags.remove(&tag_id);
                                                        } else {
                                                            tags.insert(tag_id);
                                                        }
                                                    },
                                                }
                                                span { "{tag.name}" }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        _ => rsx! {
                            p { class: "c-post-form__muted", "Loading tags..." }
                        }
                    }

                    label { class: "c-post-form__label", "Cover image" }
                    CoverImageUpload {
                        current_url: cover_image_url.read().clone(),
                        on_uploaded: move |url: String| cover_image_url.set(Some(url)),
                    }

                    button {
                        class: "c-button c-button--primary c-post-form__save",
                        disabled: saving(),
                        onclick: submit,
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }

            AiDialog {
                open: ai_open,
                initial_content: content,
                on_apply: move |result: String| content.set(result),
            }
        }
    }
}
