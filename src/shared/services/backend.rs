//! Data access facade for pages and components.
//!
//! In the browser every call is a same-origin fetch through the server
//! shell's proxy; during server-side rendering reads go straight to the
//! blog backend with the native HTTP client. Mutations only ever run in the
//! browser (event handlers don't fire during SSR).

use crate::domain::models::{
    to_query_string, Category, CategoryCreateRequest, CategoryUpdateRequest, PageResult,
    PaginationParams, Post, PostCreateRequest, PostStats, PostUpdateRequest, SearchParams, Tag,
    TagCreateRequest, TagUpdateRequest,
};
use serde::de::DeserializeOwned;

pub type DataResult<T> = Result<T, String>;

#[cfg(not(target_arch = "wasm32"))]
fn backend_base() -> String {
    std::env::var("BLOG_BACKEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

async fn get_json<T: DeserializeOwned>(path: &str) -> DataResult<T> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::shared::services::ApiService::new()
            .get::<T>(path)
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let url = format!("{}/api{}", backend_base(), path);
        let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status().as_u16()));
        }
        response.json::<T>().await.map_err(|e| e.to_string())
    }
}

// ----- Reads (both rendering sides) -----

pub async fn list_posts(
    pagination: &PaginationParams,
    search: &SearchParams,
) -> DataResult<PageResult<Post>> {
    let mut pairs = pagination.query_pairs();
    pairs.extend(search.query_pairs());
    get_json(&format!("/posts{}", to_query_string(&pairs))).await
}

pub async fn list_posts_by_category(
    category_id: i64,
    pagination: &PaginationParams,
) -> DataResult<PageResult<Post>> {
    get_json(&format!(
        "/posts/category/{category_id}{}",
        to_query_string(&pagination.query_pairs())
    ))
    .await
}

pub async fn list_posts_by_tag(
    tag_id: i64,
    pagination: &PaginationParams,
) -> DataResult<PageResult<Post>> {
    get_json(&format!(
        "/posts/tag/{tag_id}{}",
        to_query_string(&pagination.query_pairs())
    ))
    .await
}

pub async fn get_post_by_slug(slug: &str) -> DataResult<Post> {
    get_json(&format!("/posts/slug/{slug}")).await
}

pub async fn get_post_by_id(id: i64) -> DataResult<Post> {
    get_json(&format!("/posts/{id}")).await
}

pub async fn list_admin_posts(
    pagination: &PaginationParams,
    search: &SearchParams,
) -> DataResult<PageResult<Post>> {
    let mut pairs = pagination.query_pairs();
    pairs.extend(search.query_pairs());
    get_json(&format!("/posts/admin{}", to_query_string(&pairs))).await
}

pub async fn post_stats() -> DataResult<PostStats> {
    get_json("/posts/stats").await
}

pub async fn all_categories() -> DataResult<Vec<Category>> {
    get_json("/categories/all").await
}

pub async fn list_categories(pagination: &PaginationParams) -> DataResult<PageResult<Category>> {
    get_json(&format!(
        "/categories{}",
        to_query_string(&pagination.query_pairs())
    ))
    .await
}

pub async fn category_by_slug(slug: &str) -> DataResult<Category> {
    get_json(&format!("/categories/slug/{slug}")).await
}

pub async fn all_tags() -> DataResult<Vec<Tag>> {
    get_json("/tags/all").await
}

pub async fn list_tags(pagination: &PaginationParams) -> DataResult<PageResult<Tag>> {
    get_json(&format!(
        "/tags{}",
        to_query_string(&pagination.query_pairs())
    ))
    .await
}

pub async fn tag_by_slug(slug: &str) -> DataResult<Tag> {
    get_json(&format!("/tags/slug/{slug}")).await
}

pub async fn like_count(post_id: i64) -> DataResult<i64> {
    get_json(&format!("/likes/POST/{post_id}/count")).await
}

// ----- Mutations (browser only) -----

// Only one branch survives cfg, so the kept block is always the tail
// expression; the native stub is never reached at runtime.
macro_rules! browser_only {
    (($($arg:expr),*), $body:expr) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $body
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ($(&$arg),*);
            Err("mutations are browser-only".to_string())
        }
    }};
}

pub async fn create_post(data: &PostCreateRequest) -> DataResult<Post> {
    browser_only!(
        (data),
        crate::shared::services::ApiService::new()
            .create_post(data)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn update_post(id: i64, data: &PostUpdateRequest) -> DataResult<Post> {
    browser_only!(
        (id, data),
        crate::shared::services::ApiService::new()
            .update_post(id, data)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn delete_post(id: i64) -> DataResult<()> {
    browser_only!(
        (id),
        crate::shared::services::ApiService::new()
            .delete_post(id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn pin_post(id: i64) -> DataResult<()> {
    browser_only!(
        (id),
        crate::shared::services::ApiService::new()
            .pin_post(id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn unpin_post(id: i64) -> DataResult<()> {
    browser_only!(
        (id),
        crate::shared::services::ApiService::new()
            .unpin_post(id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn verify_post_password(slug: &str, password: &str) -> DataResult<()> {
    browser_only!(
        (slug, password),
        crate::shared::services::ApiService::new()
            .verify_post_password_by_slug(slug, password)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn like_post(post_id: i64) -> DataResult<()> {
    browser_only!(
        (post_id),
        crate::shared::services::ApiService::new()
            .like_post(post_id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn unlike_post(post_id: i64) -> DataResult<()> {
    browser_only!(
        (post_id),
        crate::shared::services::ApiService::new()
            .unlike_post(post_id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn is_post_liked(post_id: i64) -> DataResult<bool> {
    browser_only!(
        (post_id),
        crate::shared::services::ApiService::new()
            .is_post_liked(post_id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn create_category(data: &CategoryCreateRequest) -> DataResult<Category> {
    browser_only!(
        (data),
        crate::shared::services::ApiService::new()
            .create_category(data)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn update_category(id: i64, data: &CategoryUpdateRequest) -> DataResult<Category> {
    browser_only!(
        (id, data),
        crate::shared::services::ApiService::new()
            .update_category(id, data)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn delete_category(id: i64) -> DataResult<()> {
    browser_only!(
        (id),
        crate::shared::services::ApiService::new()
            .delete_category(id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn create_tag(data: &TagCreateRequest) -> DataResult<Tag> {
    browser_only!(
        (data),
        crate::shared::services::ApiService::new()
            .create_tag(data)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn update_tag(id: i64, data: &TagUpdateRequest) -> DataResult<Tag> {
    browser_only!(
        (id, data),
        crate::shared::services::ApiService::new()
            .update_tag(id, data)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn delete_tag(id: i64) -> DataResult<()> {
    browser_only!(
        (id),
        crate::shared::services::ApiService::new()
            .delete_tag(id)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn category_name_exists(name: &str) -> DataResult<bool> {
    browser_only!(
        (name),
        crate::shared::services::ApiService::new()
            .check_category_name_exists(name)
            .await
            .map_err(|e| e.to_string())
    )
}

pub async fn tag_name_exists(name: &str) -> DataResult<bool> {
    browser_only!(
        (name),
        crate::shared::services::ApiService::new()
            .check_tag_name_exists(name)
            .await
            .map_err(|e| e.to_string())
    )
}
