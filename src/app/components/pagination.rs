use dioxus::prelude::*;

/// Pager for post/category/tag listings.
///
/// `current` is 1-based for display; callers translate to the backend's
/// zero-based pages. Windows of page numbers collapse around the current
/// page when there are many.
#[component]
pub fn Pagination(
    current: i64,
    total_pages: i64,
    on_change: EventHandler<i64>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    let window = 2;
    let mut numbers: Vec<i64> = Vec::new();
    for page in 1..=total_pages {
        if page == 1 || page == total_pages || (page - current).abs() <= window {
            numbers.push(page);
        }
    }

    // Insert ellipsis markers (0) where the window skips pages.
    let mut display: Vec<i64> = Vec::new();
    for (i, page) in numbers.iter().enumerate() {
        if i > 0 && page - numbers[i - 1] > 1 {
            display.push(0);
        }
        display.push(*page);
    }

    rsx! {
        nav { class: "c-pagination",
            button {
                class: "c-pagination__nav",
                disabled: current <= 1,
                onclick: move |_| on_change.call(current - 1),
                "←"
            }

            for page in display {
                if page == 0 {
                    span { class: "c-pagination__ellipsis", "…" }
                } else {
                    button {
                        class: if page == current {
                            "c-pagination__page c-pagination__page--active"
                        } else {
                            "c-pagination__page"
                        },
                        onclick: move |_| {
                            if page != current {
                                on_change.call(page);
                            }
                        },
                        "{page}"
                    }
                }
            }

            button {
                class: "c-pagination__nav",
                disabled: current >= total_pages,
                onclick: move |_| on_change.call(current + 1),
                "→"
            }
        }
    }
}
