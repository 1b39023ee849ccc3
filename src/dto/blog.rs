use crate::domain::article::Article;
use crate::pagination::Paginated;

/// Query parameters accepted by the blog page service.
#[derive(Debug, Default)]
pub struct BlogQuery {
    /// Search string typed into the blog search box.
    pub search: Option<String>,
    /// Page number requested through the pagination links.
    pub page: Option<usize>,
}

/// Data required to render the blog template.
pub struct BlogPageData {
    /// Visible page of the filtered articles.
    pub articles: Paginated<Article>,
    /// Search query echoed back into the search box when present.
    pub search_query: Option<String>,
    /// Number of articles matching the query across every page.
    pub total: usize,
}
