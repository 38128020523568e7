use reqwasm::http::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::models::{
    to_query_string, Category, CategoryCreateRequest, CategoryUpdateRequest, PageResult,
    PaginationParams, Post, PostCreateRequest, PostStats, PostUpdateRequest, SearchParams, Tag,
    TagCreateRequest, TagUpdateRequest,
};
use crate::shared::errors::{ApiError, ApiResult};

// API Service for centralized HTTP requests against the blog backend.
// Requests are same-origin (the server shell proxies them upstream), so the
// admin/password cookies flow without extra configuration.
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn check(response: reqwasm::http::Response) -> ApiResult<reqwasm::http::Response> {
        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(ApiError::Status { status, message });
        }
        Ok(response)
    }

    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let response = Request::get(&self.url(endpoint)).send().await?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // Generic POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = Request::post(&self.url(endpoint))
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(body)?)
            .send()
            .await?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // POST without caring about the response body
    pub async fn post_unit<B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<()> {
        let response = Request::post(&self.url(endpoint))
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(body)?)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // Generic PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = Request::new(&self.url(endpoint))
            .method(Method::PUT)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(body)?)
            .send()
            .await?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // Generic DELETE request
    pub async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        let response = Request::delete(&self.url(endpoint)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    // ----- Posts -----

    pub async fn get_posts(
        &self,
        pagination: &PaginationParams,
        search: &SearchParams,
    ) -> ApiResult<PageResult<Post>> {
        let mut pairs = pagination.query_pairs();
        pairs.extend(search.query_pairs());
        self.get(&format!("/posts{}", to_query_string(&pairs))).await
    }

    /// Admin listing: includes drafts and password-protected posts.
    pub async fn get_admin_posts(
        &self,
        pagination: &PaginationParams,
        search: &SearchParams,
    ) -> ApiResult<PageResult<Post>> {
        let mut pairs = pagination.query_pairs();
        pairs.extend(search.query_pairs());
        self.get(&format!("/posts/admin{}", to_query_string(&pairs)))
            .await
    }

    pub async fn get_post_stats(&self) -> ApiResult<PostStats> {
        self.get("/posts/stats").await
    }

    pub async fn get_post_by_id(&self, id: i64) -> ApiResult<Post> {
        self.get(&format!("/posts/{id}")).await
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> ApiResult<Post> {
        self.get(&format!("/posts/slug/{slug}")).await
    }

    /// Unlock a password-protected post; the backend answers with an access
    /// cookie consumed by subsequent reads.
    pub async fn verify_post_password_by_slug(&self, slug: &str, password: &str) -> ApiResult<()> {
        let response = Request::post(&self.url(&format!("/posts/slug/{slug}/access")))
            .header("Content-Type", "text/plain;charset=UTF-8")
            .body(password.to_string())
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn verify_post_password_by_id(&self, post_id: i64, password: &str) -> ApiResult<()> {
        let response = Request::post(&self.url(&format!("/posts/{post_id}/access")))
            .header("Content-Type", "text/plain;charset=UTF-8")
            .body(password.to_string())
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn create_post(&self, data: &PostCreateRequest) -> ApiResult<Post> {
        self.post("/posts", data).await
    }

    pub async fn update_post(&self, id: i64, data: &PostUpdateRequest) -> ApiResult<Post> {
        self.put(&format!("/posts/{id}"), data).await
    }

    pub async fn delete_post(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/posts/{id}")).await
    }

    pub async fn pin_post(&self, id: i64) -> ApiResult<()> {
        self.post_unit(&format!("/posts/{id}/pin"), &serde_json::json!({}))
            .await
    }

    pub async fn unpin_post(&self, id: i64) -> ApiResult<()> {
        self.post_unit(&format!("/posts/{id}/unpin"), &serde_json::json!({}))
            .await
    }

    pub async fn get_posts_by_category(
        &self,
        category_id: i64,
        pagination: &PaginationParams,
    ) -> ApiResult<PageResult<Post>> {
        self.get(&format!(
            "/posts/category/{category_id}{}",
            to_query_string(&pagination.query_pairs())
        ))
        .await
    }

    pub async fn get_posts_by_tag(
        &self,
        tag_id: i64,
        pagination: &PaginationParams,
    ) -> ApiResult<PageResult<Post>> {
        self.get(&format!(
            "/posts/tag/{tag_id}{}",
            to_query_string(&pagination.query_pairs())
        ))
        .await
    }

    // ----- Categories -----

    pub async fn get_categories(
        &self,
        pagination: &PaginationParams,
    ) -> ApiResult<PageResult<Category>> {
        self.get(&format!(
            "/categories{}",
            to_query_string(&pagination.query_pairs())
        ))
        .await
    }

    pub async fn get_all_categories(&self) -> ApiResult<Vec<Category>> {
        self.get("/categories/all").await
    }

    pub async fn get_category_by_id(&self, id: i64) -> ApiResult<Category> {
        self.get(&format!("/categories/{id}")).await
    }

    pub async fn get_category_by_slug(&self, slug: &str) -> ApiResult<Category> {
        self.get(&format!("/categories/slug/{slug}")).await
    }

    pub async fn get_category_children(&self, parent_id: i64) -> ApiResult<Vec<Category>> {
        self.get(&format!("/categories/{parent_id}/children")).await
    }

    pub async fn create_category(&self, data: &CategoryCreateRequest) -> ApiResult<Category> {
        self.post("/categories", data).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        data: &CategoryUpdateRequest,
    ) -> ApiResult<Category> {
        self.put(&format!("/categories/{id}"), data).await
    }

    pub async fn delete_category(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/categories/{id}")).await
    }

    pub async fn check_category_name_exists(&self, name: &str) -> ApiResult<bool> {
        self.get(&format!(
            "/categories/exists/name/{}",
            urlencoding::encode(name)
        ))
        .await
    }

    pub async fn check_category_slug_exists(&self, slug: &str) -> ApiResult<bool> {
        self.get(&format!("/categories/exists/slug/{slug}")).await
    }

    // ----- Tags -----

    pub async fn get_tags(&self, pagination: &PaginationParams) -> ApiResult<PageResult<Tag>> {
        self.get(&format!(
            "/tags{}",
            to_query_string(&pagination.query_pairs())
        ))
        .await
    }

    pub async fn get_all_tags(&self) -> ApiResult<Vec<Tag>> {
        self.get("/tags/all").await
    }

    pub async fn get_tag_by_id(&self, id: i64) -> ApiResult<Tag> {
        self.get(&format!("/tags/{id}")).await
    }

    pub async fn get_tag_by_slug(&self, slug: &str) -> ApiResult<Tag> {
        self.get(&format!("/tags/slug/{slug}")).await
    }

    pub async fn create_tag(&self, data: &TagCreateRequest) -> ApiResult<Tag> {
        self.post("/tags", data).await
    }

    pub async fn update_tag(&self, id: i64, data: &TagUpdateRequest) -> ApiResult<Tag> {
        self.put(&format!("/tags/{id}"), data).await
    }

    pub async fn delete_tag(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/tags/{id}")).await
    }

    pub async fn check_tag_name_exists(&self, name: &str) -> ApiResult<bool> {
        self.get(&format!("/tags/exists/name/{}", urlencoding::encode(name)))
            .await
    }

    pub async fn check_tag_slug_exists(&self, slug: &str) -> ApiResult<bool> {
        self.get(&format!("/tags/exists/slug/{slug}")).await
    }

    // ----- Likes -----

    pub async fn like_post(&self, post_id: i64) -> ApiResult<()> {
        self.post_unit(&format!("/likes/POST/{post_id}"), &serde_json::json!({}))
            .await
    }

    pub async fn unlike_post(&self, post_id: i64) -> ApiResult<()> {
        self.delete(&format!("/likes/POST/{post_id}")).await
    }

    pub async fn get_like_count(&self, post_id: i64) -> ApiResult<i64> {
        self.get(&format!("/likes/POST/{post_id}/count")).await
    }

    pub async fn is_post_liked(&self, post_id: i64) -> ApiResult<bool> {
        self.get(&format!("/likes/POST/{post_id}/status")).await
    }

    // ----- Admin auth -----

    /// Verify the back-office password. The backend always answers 200 with
    /// a `{success, message}` envelope.
    pub async fn admin_login(&self, password: &str) -> ApiResult<bool> {
        let value: serde_json::Value = self
            .post(
                "/auth/admin-login",
                &serde_json::json!({ "password": password }),
            )
            .await?;
        Ok(value
            .get("success")
            .and_then(|v| v.as_bool())
            .unwrap_or(false))
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}
