use crate::content::ARTICLES_PER_PAGE;
pub use crate::dto::api::{ArticlesQuery, ArticlesResponse};
use crate::repository::{ArticleListQuery, ArticleReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns the filtered list of articles, one page of it when `page` is set.
///
/// Unlike the blog page the requested page is not clamped: a page past the
/// end yields an empty list next to the real total.
pub fn list_articles<R>(repo: &R, params: ArticlesQuery) -> ServiceResult<ArticlesResponse>
where
    R: ArticleReader + ?Sized,
{
    let mut query = ArticleListQuery::new();

    if let Some(page) = params.page {
        query = query.paginate(page, ARTICLES_PER_PAGE);
    }

    if let Some(term) = params.search.filter(|s| !s.is_empty()) {
        query = query.search(term);
    }

    let (total, articles) = repo.list_articles(query).map_err(ServiceError::from)?;

    Ok(ArticlesResponse { total, articles })
}
