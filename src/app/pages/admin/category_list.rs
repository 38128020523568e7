use crate::app::components::{EmptyState, ErrorMessage, LoadingText, Pagination};
use crate::domain::models::{CategoryCreateRequest, PaginationParams};
use crate::shared::services::backend;
use crate::shared::utils::text::generate_slug;
use dioxus::prelude::*;

const PAGE_SIZE: i64 = 20;

/// Category management: paged table plus a create form.
#[component]
pub fn AdminCategoryList() -> Element {
    let mut page = use_signal(|| 0i64);
    // Bumped after create/delete to refetch the table.
    let mut reload = use_signal(|| 0u32);
    let mut confirm_delete = use_signal(|| None::<i64>);
    let mut action_error = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let current_page = page();
        let _ = reload();
        async move { backend::list_categories(&PaginationParams::new(current_page, PAGE_SIZE)).await }
    });

    let delete_category = move |id: i64| {
        spawn(async move {
            match backend::delete_category(id).await {
                Ok(()) => {
                    confirm_delete.set(None);
                    reload.set(reload() + 1);
                }
                Err(e) => {
                    tracing::error!("category delete failed: {e}");
                    // The backend refuses to delete categories that still
                    // have posts.
                    action_error.set(Some(
                        "Delete failed - the category may still contain posts".to_string(),
                    ));
                    confirm_delete.set(None);
                }
            }
        });
    };

    rsx! {
        div { class: "c-admin-page",
            header { class: "c-admin-page__header",
                h1 { "📁 Categories" }
            }

            CategoryCreateForm {
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
                                icon: "📁",
                                title: "No categories",
                                description: "Create a category to organize posts.",
                            }
                        } else {
                            table { class: "c-admin-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Slug" }
                                        th { "Posts" }
                                        th { "Description" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for category in result.content.iter() {
                                        {
                                            let id = category.id;
                                            let confirming = confirm_delete() == Some(id);
                                            let post_count = category.post_count.unwrap_or(0);
                                            let description = category.description.clone().unwrap_or_default();
                                            rsx! {
                                                tr { key: "{id}", class: "c-admin-table__row",
                                                    td { "{category.name}" }
                                                    td { code { "{category.slug}" } }
                                                    td { "{post_count}" }
                                                    td { class: "c-admin-table__muted",
                                                        "{description}"
                                                    }
                                                    td { class: "c-admin-table__actions",
                                                        if confirming {
                                                            span { class: "c-admin-table__confirm", "Delete?" }
                                                            button {
                                                                class: "c-button c-button--danger",
                                                                onclick: move |_| delete_category(id),
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
                    ErrorMessage { message: "Could not load categories: {e}" }
                },
                None => rsx! {
                    LoadingText { message: "Loading categories..." }
                }
            }
        }
    }
}

#[component]
fn CategoryCreateForm(on_created: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_| {
        let name_value = name.read().trim().to_string();
        if name_value.is_empty() {
            return;
        }
        creating.set(true);
        error.set(None);
        let description_value = description.read().trim().to_string();

        spawn(async move {
            // Surface duplicates before the backend rejects them.
            if let Ok(true) = backend::category_name_exists(&name_value).await {
                error.set(Some("A category with this name already exists".to_string()));
                creating.set(false);
                return;
            }

            let request = CategoryCreateRequest {
                name: name_value.clone(),
                slug: Some(generate_slug(&name_value)),
                description: (!description_value.is_empty()).then_some(description_value),
                ..Default::default()
            };
            match backend::create_category(&request).await {
                Ok(_) => {
                    name.set(String::new());
                    description.set(String::new());
                    on_created.call(());
                }
                Err(e) => {
                    tracing::error!("category create failed: {e}");
                    error.set(Some("Creating the category failed".to_string()));
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
                placeholder: "New category name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                r#type: "text",
                class: "c-inline-form__input c-inline-form__input--wide",
                placeholder: "Description (optional)",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
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
