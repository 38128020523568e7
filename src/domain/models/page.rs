use serde::{Deserialize, Serialize};

/// One page of a paginated backend response (Spring `Page<T>` shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    /// Zero-based page index.
    pub number: i64,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub number_of_elements: i64,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size: 0,
            number: 0,
            first: true,
            last: true,
            number_of_elements: 0,
        }
    }
}

/// Pagination query parameters. `page` is zero-based, matching the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: i64,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PaginationParams {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }
}

/// Free-text / facet search parameters for post listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,
}

impl PaginationParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

impl SearchParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(keyword) = &self.keyword {
            if !keyword.trim().is_empty() {
                pairs.push(("keyword", keyword.clone()));
            }
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryId", category_id.to_string()));
        }
        if let Some(tag_id) = self.tag_id {
            pairs.push(("tagId", tag_id.to_string()));
        }
        pairs
    }
}

/// Percent-encode pairs into a `?`-prefixed query string; empty input
/// yields an empty string.
pub fn to_query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_pairs_include_sort_only_when_set() {
        let params = PaginationParams::new(2, 10);
        assert_eq!(
            to_query_string(&params.query_pairs()),
            "?page=2&size=10"
        );

        let sorted = PaginationParams {
            sort: Some("publishedAt,desc".to_string()),
            ..params
        };
        assert_eq!(
            to_query_string(&sorted.query_pairs()),
            "?page=2&size=10&sort=publishedAt%2Cdesc"
        );
    }

    #[test]
    fn search_pairs_skip_blank_keyword() {
        let params = SearchParams {
            keyword: Some("   ".to_string()),
            category_id: Some(3),
            tag_id: None,
        };
        assert_eq!(to_query_string(&params.query_pairs()), "?categoryId=3");
    }

    #[test]
    fn keyword_is_percent_encoded() {
        let params = SearchParams {
            keyword: Some("rust 异步".to_string()),
            category_id: None,
            tag_id: None,
        };
        assert_eq!(
            to_query_string(&params.query_pairs()),
            "?keyword=rust%20%E5%BC%82%E6%AD%A5"
        );
    }

    #[test]
    fn empty_pairs_yield_empty_string() {
        assert_eq!(to_query_string(&[]), "");
    }
}
