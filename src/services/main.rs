use crate::content;
use crate::domain::article::Article;
use crate::dto::main::{AboutPageData, FaqPageData, HomePageData, SignupPageData};
use crate::repository::{ArticleListQuery, ArticleReader, FaqReader};
use crate::services::{ServiceError, ServiceResult};

/// The first [`content::FEATURED_ARTICLES`] articles, shown on the landing
/// pages below the main content.
pub(crate) fn featured_articles<R>(repo: &R) -> ServiceResult<Vec<Article>>
where
    R: ArticleReader + ?Sized,
{
    let (_total, articles) = repo
        .list_articles(ArticleListQuery::new().paginate(1, content::FEATURED_ARTICLES))
        .map_err(|err| {
            log::error!("Failed to list featured articles: {err}");
            ServiceError::from(err)
        })?;
    Ok(articles)
}

pub fn load_home_page<R>(repo: &R) -> ServiceResult<HomePageData>
where
    R: ArticleReader + ?Sized,
{
    Ok(HomePageData {
        hero: content::HERO,
        specialization: content::SPECIALIZATION_HEADER,
        career_fields: content::CAREER_FIELDS,
        articles: featured_articles(repo)?,
        fund_research: content::FUND_RESEARCH_CTA,
        choose_us: content::CHOOSE_US,
        reasons: content::REASONS,
        leaderboard: content::LEADERBOARD,
        universities: content::UNIVERSITIES,
    })
}

pub fn load_about_page<R>(repo: &R) -> ServiceResult<AboutPageData>
where
    R: ArticleReader + ?Sized,
{
    Ok(AboutPageData {
        header: content::ABOUT_HEADER,
        set_us_apart: content::SET_US_APART,
        statements: content::STATEMENTS,
        articles: featured_articles(repo)?,
        success_numbers: content::SUCCESS_NUMBERS,
    })
}

pub fn load_faq_page<R>(repo: &R) -> ServiceResult<FaqPageData>
where
    R: FaqReader + ?Sized,
{
    let sections = repo.list_faq_sections().map_err(|err| {
        log::error!("Failed to list FAQ sections: {err}");
        ServiceError::from(err)
    })?;
    Ok(FaqPageData { sections })
}

pub fn load_signup_page() -> SignupPageData {
    SignupPageData {
        signup: content::SIGNUP,
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::content::{ARTICLES, FAQ_SECTIONS, FEATURED_ARTICLES};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[test]
    fn home_page_requests_the_first_featured_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_articles()
            .withf(|query| {
                query.search.is_none()
                    && query
                        .pagination
                        .as_ref()
                        .is_some_and(|p| p.page == 1 && p.per_page == FEATURED_ARTICLES)
            })
            .times(1)
            .returning(|_| Ok((ARTICLES.len(), ARTICLES[..FEATURED_ARTICLES].to_vec())));

        let data = load_home_page(&repo).expect("should load");

        assert_eq!(data.articles.len(), FEATURED_ARTICLES);
        assert_eq!(data.hero, content::HERO);
    }

    #[test]
    fn about_page_fails_when_articles_cannot_be_read() {
        let mut repo = MockRepository::new();
        repo.expect_list_articles()
            .returning(|_| Err(RepositoryError::Unexpected("down".to_string())));

        let result = load_about_page(&repo);

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn faq_page_lists_every_section() {
        let mut repo = MockRepository::new();
        repo.expect_list_faq_sections()
            .times(1)
            .returning(|| Ok(FAQ_SECTIONS.to_vec()));

        let data = load_faq_page(&repo).expect("should load");

        let titles: Vec<_> = data.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), 4);
        assert_eq!(titles[0], FAQ_SECTIONS[0].title);
    }
}
