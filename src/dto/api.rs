//! DTOs exposed by the article API endpoint.

use serde::Serialize;

use crate::domain::article::Article;

/// Query parameters accepted by the `/api/v1/articles` service.
#[derive(Debug, Default)]
pub struct ArticlesQuery {
    /// Optional free-form search string applied to the article list.
    pub search: Option<String>,
    /// Optional page number for pagination.
    pub page: Option<usize>,
}

/// Result payload returned by [`crate::services::api::list_articles`].
#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    /// Total number of articles matching the filter.
    pub total: usize,
    /// Page of articles requested by the caller.
    pub articles: Vec<Article>,
}
