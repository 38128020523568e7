use crate::domain::models::{compare_for_listing, PageResult, Post};
use dioxus::prelude::*;

/// Post list state shared by the public and admin listings.
///
/// Fetching is driven by the page components; this hook owns the signals and
/// the bookkeeping around them.
#[derive(Clone, Copy, PartialEq)]
pub struct PostsState {
    pub posts: Signal<Vec<Post>>,
    pub total_elements: Signal<i64>,
    pub total_pages: Signal<i64>,
    /// Zero-based, matching the backend.
    pub page: Signal<i64>,
    pub page_size: Signal<i64>,
    pub keyword: Signal<String>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl PostsState {
    /// Install a fetched page. Posts are re-sorted locally so a pin toggled
    /// from the admin table reorders without a refetch round-trip.
    pub fn apply_page(&mut self, mut page: PageResult<Post>) {
        page.content.sort_by(compare_for_listing);
        self.posts.set(page.content);
        self.total_elements.set(page.total_elements);
        self.total_pages.set(page.total_pages);
        self.loading.set(false);
        self.error.set(None);
    }

    pub fn set_error(&mut self, message: String) {
        self.error.set(Some(message));
        self.loading.set(false);
    }

    pub fn start_loading(&mut self) {
        self.loading.set(true);
        self.error.set(None);
    }

    /// New search keyword resets to the first page.
    pub fn set_keyword(&mut self, keyword: String) {
        self.keyword.set(keyword);
        self.page.set(0);
    }

    pub fn set_page(&mut self, page: i64, size: i64) {
        self.page.set(page);
        self.page_size.set(size);
    }

    /// Drop a post from the current page without refetching.
    pub fn remove_post(&mut self, id: i64) {
        self.posts.write().retain(|p| p.id != id);
    }

    /// Flip the pinned flag locally and restore listing order.
    pub fn set_pinned(&mut self, id: i64, pinned: bool, pinned_at: Option<String>) {
        let mut posts = self.posts.write();
        if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
            post.pinned = pinned;
            post.pinned_at = pinned_at;
        }
        posts.sort_by(compare_for_listing);
    }
}

/// Hook constructing the shared post list state.
pub fn use_posts() -> PostsState {
    let posts = use_signal(Vec::<Post>::new);
    let total_elements = use_signal(|| 0i64);
    let total_pages = use_signal(|| 0i64);
    let page = use_signal(|| 0i64);
    let page_size = use_signal(|| 10i64);
    let keyword = use_signal(String::new);
    let loading = use_signal(|| false);
    let error = use_signal(|| None::<String>);

    PostsState {
        posts,
        total_elements,
        total_pages,
        page,
        page_size,
        keyword,
        loading,
        error,
    }
}
