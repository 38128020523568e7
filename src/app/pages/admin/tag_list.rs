use crate::app::components::{EmptyState, ErrorMessage, LoadingText, Pagination};
use crate::domain::models::{PaginationParams, TagCreateRequest};
use crate::shared::services::backend;
use crate::shared::utils::text::generate_slug;
use dioxus::prelude::*;

const PAGE_SIZE: i64 = 30;

/// Tag management: paged table plus a create form with color.
#[component]
pub fn AdminTagList() -> Element {
    let mut page = use_signal(|| 0i64);
    let mut reload = use_signal(|| 0u32);
    let mut confirm_delete = use_signal(|| None::<i64>);
    let mut action_error = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let current_page = page();
        let _ = reload();
        async move { backend::list_tags(&PaginationParams::new(current_page, PAGE_SIZE)).await }
    });

    let delete_tag = move |id: i64| {
        spawn(async move {
            match backend::delete_tag(id).await {
                Ok(()) => {
                    confirm_delete.set(None);
                    reload.set(reload() + 1);
                }
                Err(e) => {
                    tracing::error!("tag delete failed: {e}");
                    action_error.set(Some(
                        "Delete failed - the tag may still be used by posts".to_string(),
                    ));
                    confirm_delete.set(None);
                }
            }
        });
    };

    rsx! {
        div { class: "c-admin-page",
            header { class: "c-admin-page__header",
                h1 { "🏷️ Tags" }
            }

            TagCreateForm {
                on_created: move |_| reload.set(reload() + 1),
            }

            if let Some(message) = action_error() {
                ErrorMessage { message }
            }

            match &*resource.read() {
                Some(Ok(result)) => {
                    let total_pages = result.total_pages;
                    rsx! {
                        if result.content.is_empty() {
                            EmptyState {
                                icon: "🏷️",
                                title: "No tags",
                                description: "Create a tag to label posts.",
                            }
                        } else {
                            table { class: "c-admin-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Slug" }
                                        th { "Color" }
                                        th { "Posts" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for tag in result.content.iter() {
                                        {
                                            let id = tag.id;
                                            let confirming = confirm_delete() == Some(id);
                                            let swatch = tag.color.clone().unwrap_or_else(|| "#8884".to_string());
                                            rsx! {
                                                tr { key: "{id}", class: "c-admin-table__row",
                                                    td { "{tag.name}" }
                                                    td { code { "{tag.slug}" } }
                                                    td {
                                                        span {
                                                            class: "c-color-swatch",
                                                            style: "background: {swatch};",
                                                        }
                                                    }
                                                    td { "{tag.post_count}" }
                                                    td { class: "c-admin-table__actions",
                                                        if confirming {
                                                            span { class: "c-admin-table__confirm", "Delete?" }
                                                            button {
                                                                class: "c-button c-button--danger",
                                                                onclick: move |_| delete_tag(id),
                                                                "Yes"
                                                            }
                                                            button {
                                                                class: "c-button c-button--secondary",
                                                                onclick: move |_| confirm_delete.set(None),
                                                                "No"
                                                            }
                                                        } else {
                                                            button {
                                                                class: "c-button c-button--danger",
                                                                onclick: move |_| confirm_delete.set(Some(id)),
                                                                "🗑"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            Pagination {
                                current: page() + 1,
                                total_pages,
                                on_change: move |display_page: i64| page.set(display_page - 1),
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    ErrorMessage { message: "Could not load tags: {e}" }
                },
                None => rsx! {
                    LoadingText { message: "Loading tags..." }
                }
            }
        }
    }
}

#[component]
fn TagCreateForm(on_created: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut color = use_signal(|| "#1677ff".to_string());
    let mut creating = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_| {
        let name_value = name.read().trim().to_string();
        if name_value.is_empty() {
            return;
        }
        creating.set(true);
        error.set(None);
        let color_value = color.read().clone();

        spawn(async move {
            if let Ok(true) = backend::tag_name_exists(&name_value).await {
                error.set(Some("A tag with this name already exists".to_string()));
                creating.set(false);
                return;
            }

            let request = TagCreateRequest {
                name: name_value.clone(),
                slug: Some(generate_slug(&name_value)),
                color: Some(color_value),
            };
            match backend::create_tag(&request).await {
                Ok(_) => {
                    name.set(String::new());
                    on_created.call(());
                }
                Err(e) => {
                    tracing::error!("tag create failed: {e}");
                    error.set(Some("Creating the tag failed".to_string()));
                }
            }
            creating.set(false);
        });
    };

    rsx! {
        div { class: "c-inline-form",
            input {
                r#type: "text",
                class: "c-inline-form__input",
                placeholder: "New tag name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                r#type: "color",
                class: "c-inline-form__color",
                value: "{color}",
                oninput: move |evt| color.set(evt.value()),
            }
            button {
                class: "c-button c-button--primary",
                disabled: creating() || name.read().trim().is_empty(),
                onclick: submit,
                if creating() { "Creating..." } else { "＋ Add" }
            }
            if let Some(message) = error() {
                p { class: "c-inline-form__error", "{message}" }
            }
        }
    }
}
