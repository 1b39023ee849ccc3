use crate::content::ARTICLES_PER_PAGE;
use crate::domain::article::Article;
pub use crate::dto::blog::BlogQuery;
use crate::dto::blog::BlogPageData;
use crate::pagination::{Paginated, clamp_page, total_pages};
use crate::repository::{ArticleListQuery, ArticleReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the filtered, paginated article list for the blog page.
///
/// The requested page is clamped into the available range, so a stale or
/// hand-edited page number still lands on a page with articles.
pub fn load_blog_page<R>(repo: &R, query: BlogQuery) -> ServiceResult<BlogPageData>
where
    R: ArticleReader + ?Sized,
{
    let search_query = query.search.filter(|s| !s.is_empty());

    let mut list_query = ArticleListQuery::new();
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let (total, matching) = repo.list_articles(list_query).map_err(|err| {
        log::error!("Failed to list articles: {err}");
        ServiceError::from(err)
    })?;

    let page = clamp_page(
        query.page.unwrap_or(1),
        total_pages(total, ARTICLES_PER_PAGE),
    );
    let articles: Paginated<Article> = Paginated::from_items(&matching, page, ARTICLES_PER_PAGE);

    Ok(BlogPageData {
        articles,
        search_query,
        total,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::content::ARTICLES;
    use crate::domain::article::filter_articles;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn repo_with(articles: Vec<Article>) -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_list_articles()
            .times(1)
            .returning(move |_| Ok((articles.len(), articles.clone())));
        repo
    }

    /// First page shows nine of the twelve articles.
    #[test]
    fn first_page_holds_nine_articles() {
        let repo = repo_with(ARTICLES.to_vec());

        let data = load_blog_page(&repo, BlogQuery::default()).expect("should load");

        assert_eq!(data.total, 12);
        assert_eq!(data.articles.items.len(), 9);
        assert_eq!(data.articles.page, 1);
        assert_eq!(data.articles.total_pages, 2);
        assert!(!data.articles.has_previous);
        assert!(data.articles.has_next);
        assert!(data.search_query.is_none());
    }

    #[test]
    fn second_page_holds_the_remaining_three() {
        let repo = repo_with(ARTICLES.to_vec());

        let data = load_blog_page(
            &repo,
            BlogQuery {
                search: None,
                page: Some(2),
            },
        )
        .expect("should load");

        assert_eq!(data.articles.items.len(), 3);
        assert_eq!(data.articles.items[0], ARTICLES[9]);
        assert!(data.articles.has_previous);
        assert!(!data.articles.has_next);
    }

    /// Page numbers past the end fall back to the last page.
    #[test]
    fn out_of_range_page_is_clamped() {
        let repo = repo_with(ARTICLES.to_vec());

        let data = load_blog_page(
            &repo,
            BlogQuery {
                search: None,
                page: Some(7),
            },
        )
        .expect("should load");

        assert_eq!(data.articles.page, 2);
        assert_eq!(data.articles.items.len(), 3);
    }

    #[test]
    fn search_is_forwarded_as_typed() {
        let mut repo = MockRepository::new();
        repo.expect_list_articles()
            .withf(|query| query.search.as_deref() == Some("jane doe") && query.pagination.is_none())
            .times(1)
            .returning(|query| {
                let found = filter_articles(ARTICLES, query.search.as_deref().unwrap_or(""));
                Ok((found.len(), found))
            });

        let data = load_blog_page(
            &repo,
            BlogQuery {
                search: Some("jane doe".to_string()),
                page: None,
            },
        )
        .expect("should load");

        assert_eq!(data.search_query.as_deref(), Some("jane doe"));
        assert!(data.articles.items.iter().all(|a| a.author_name == "Jane Doe"));
    }

    /// Surrounding whitespace is part of the substring, so the page shows
    /// exactly what the article filter admits.
    #[test]
    fn trailing_space_is_matched_literally() {
        let mut repo = MockRepository::new();
        repo.expect_list_articles()
            .withf(|query| query.search.as_deref() == Some("jane doe "))
            .times(1)
            .returning(|query| {
                let found = filter_articles(ARTICLES, query.search.as_deref().unwrap_or(""));
                Ok((found.len(), found))
            });

        let data = load_blog_page(
            &repo,
            BlogQuery {
                search: Some("jane doe ".to_string()),
                page: None,
            },
        )
        .expect("should load");

        assert_eq!(data.total, filter_articles(ARTICLES, "jane doe ").len());
        assert_eq!(data.total, 0);
        assert!(data.articles.items.is_empty());
    }

    #[test]
    fn empty_search_lists_everything() {
        let mut repo = MockRepository::new();
        repo.expect_list_articles()
            .withf(|query| query.search.is_none())
            .times(1)
            .returning(|_| Ok((ARTICLES.len(), ARTICLES.to_vec())));

        let data = load_blog_page(
            &repo,
            BlogQuery {
                search: Some(String::new()),
                page: None,
            },
        )
        .expect("should load");

        assert!(data.search_query.is_none());
        assert_eq!(data.total, ARTICLES.len());
    }

    /// No matches still renders page 1 of an empty listing.
    #[test]
    fn empty_result_renders_page_one() {
        let repo = repo_with(Vec::new());

        let data = load_blog_page(
            &repo,
            BlogQuery {
                search: Some("xyz-no-match".to_string()),
                page: Some(3),
            },
        )
        .expect("should load");

        assert_eq!(data.total, 0);
        assert!(data.articles.items.is_empty());
        assert_eq!(data.articles.page, 1);
        assert_eq!(data.articles.total_pages, 0);
        assert!(!data.articles.has_next);
    }

    #[test]
    fn repository_failure_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_list_articles()
            .returning(|_| Err(RepositoryError::Unexpected("boom".to_string())));

        let result = load_blog_page(&repo, BlogQuery::default());

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
