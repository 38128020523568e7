use crate::app::pages::routes::Route;
use crate::domain::models::Post;
use crate::shared::utils::date::format_date_short;
use crate::shared::utils::text::extract_excerpt;
use dioxus::prelude::*;

/// One entry in a post listing: pinned badge, title, excerpt, meta line.
#[component]
pub fn PostCard(post: Post, #[props(default = true)] show_excerpt: bool) -> Element {
    let excerpt = post
        .excerpt
        .clone()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| extract_excerpt(&post.content, 150));

    let published = post
        .published_at
        .as_deref()
        .map(format_date_short)
        .unwrap_or_else(|| format_date_short(&post.created_at));

    rsx! {
        article { class: "c-post-card",
            div { class: "c-post-card__header",
                if post.pinned {
                    span { class: "c-post-card__pin", "📌 Pinned" }
                }
                if post.is_password_protected() {
                    span { class: "c-post-card__lock", "🔒" }
                }
                Link {
                    to: Route::PostDetail { slug: post.slug.clone() },
                    class: "c-post-card__title",
                    "{post.title}"
                }
            }

            if let Some(cover) = &post.cover_image_url {
                img {
                    class: "c-post-card__cover",
                    src: "{cover}",
                    alt: "{post.title}",
                    loading: "lazy",
                }
            }

            if show_excerpt && !excerpt.is_empty() {
                p { class: "c-post-card__excerpt", "{excerpt}" }
            }

            div { class: "c-post-card__meta",
                span { class: "c-post-card__date", "📅 {published}" }
                span { class: "c-post-card__views", "👁 {post.view_count}" }
                span { class: "c-post-card__likes", "❤️ {post.like_count}" }

                div { class: "c-post-card__tags",
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
        }
    }
}
