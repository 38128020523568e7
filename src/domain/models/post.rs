use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::tag::Tag;
use crate::shared::utils::date::parse_backend_timestamp;

/// How the post body is stored and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Markdown,
    Html,
    RichText,
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Markdown
    }
}

/// Draft posts are only visible in the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    Draft,
    Published,
}

/// Published posts are either public or password-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    Public,
    Password,
}

/// A blog post as the backend serves it.
///
/// Timestamps are kept as the backend's ISO strings and parsed on demand;
/// the backend emits both zoned and local date-times depending on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    pub status: PostStatus,
    pub visibility: Visibility,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub pinned_at: Option<String>,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn is_password_protected(&self) -> bool {
        self.visibility == Visibility::Password
    }
}

/// Listing order for post collections merged on the client: pinned posts
/// first (most recently pinned leading), then newest published, then newest
/// created; id breaks the remaining ties so the order is total.
pub fn compare_for_listing(a: &Post, b: &Post) -> Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| cmp_timestamp_desc(&a.pinned_at, &b.pinned_at))
        .then_with(|| cmp_timestamp_desc(&a.published_at, &b.published_at))
        .then_with(|| {
            cmp_timestamp_desc(&Some(a.created_at.clone()), &Some(b.created_at.clone()))
        })
        .then_with(|| b.id.cmp(&a.id))
}

/// Descending by timestamp; posts without the timestamp sort after posts
/// that have it.
fn cmp_timestamp_desc(a: &Option<String>, b: &Option<String>) -> Ordering {
    let a = a.as_deref().and_then(parse_backend_timestamp);
    let b = b.as_deref().and_then(parse_backend_timestamp);
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStats {
    pub total_posts: i64,
    pub published_posts: i64,
    pub draft_posts: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_post(id: i64, pinned: bool, pinned_at: Option<&str>, published_at: Option<&str>) -> Post {
        Post {
            id,
            title: format!("post-{id}"),
            slug: format!("post-{id}"),
            excerpt: None,
            content: String::new(),
            content_type: ContentType::Markdown,
            status: PostStatus::Published,
            visibility: Visibility::Public,
            category_id: None,
            cover_image_url: None,
            pinned,
            pinned_at: pinned_at.map(String::from),
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            published_at: published_at.map(String::from),
            created_at: "2025-01-01T00:00:00".to_string(),
            updated_at: "2025-01-01T00:00:00".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn pinned_posts_sort_before_unpinned() {
        let mut posts = vec![
            make_post(1, false, None, Some("2025-06-01T10:00:00")),
            make_post(2, true, Some("2025-03-01T10:00:00"), Some("2025-01-01T10:00:00")),
        ];
        posts.sort_by(compare_for_listing);
        assert_eq!(posts[0].id, 2);
    }

    #[test]
    fn most_recently_pinned_leads() {
        let mut posts = vec![
            make_post(1, true, Some("2025-02-01T10:00:00"), None),
            make_post(2, true, Some("2025-04-01T10:00:00"), None),
        ];
        posts.sort_by(compare_for_listing);
        assert_eq!(posts[0].id, 2);
    }

    #[test]
    fn unpinned_posts_order_by_published_at_desc() {
        let mut posts = vec![
            make_post(1, false, None, Some("2025-01-01T10:00:00")),
            make_post(2, false, None, Some("2025-05-01T10:00:00")),
            make_post(3, false, None, Some("2025-03-01T10:00:00")),
        ];
        posts.sort_by(compare_for_listing);
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn missing_published_at_sorts_last_then_by_id_desc() {
        let mut posts = vec![
            make_post(1, false, None, None),
            make_post(2, false, None, Some("2025-05-01T10:00:00")),
            make_post(3, false, None, None),
        ];
        posts.sort_by(compare_for_listing);
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn status_and_visibility_use_backend_spelling() {
        let post = make_post(1, false, None, None);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["status"], "PUBLISHED");
        assert_eq!(json["visibility"], "PUBLIC");
        assert_eq!(json["contentType"], "MARKDOWN");
    }

    #[test]
    fn deserializes_minimal_backend_payload() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": 9,
                "title": "Hello",
                "slug": "hello",
                "status": "DRAFT",
                "visibility": "PUBLIC",
                "createdAt": "2025-01-02T03:04:05",
                "updatedAt": "2025-01-02T03:04:05"
            }"#,
        )
        .unwrap();
        assert_eq!(post.id, 9);
        assert!(!post.pinned);
        assert!(post.tags.is_empty());
        assert_eq!(post.content_type, ContentType::Markdown);
    }
}
