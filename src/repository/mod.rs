//! Read access to the site content and the sink that receives form
//! submissions.

use crate::content;
use crate::domain::article::{Article, filter_articles};
use crate::domain::contact::{ContactSubmission, Subscription};
use crate::domain::page::FaqSection;
use crate::domain::research::ResearchApplication;
use crate::pagination::paginate;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ArticleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ArticleReader {
    /// Returns the number of matching articles and the requested page of
    /// them (all of them when the query is not paginated).
    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)>;
}

pub trait FaqReader {
    fn list_faq_sections(&self) -> RepositoryResult<Vec<FaqSection>>;
}

/// Destination of accepted form submissions.
pub trait SubmissionWriter {
    fn record_contact_submission(&self, submission: &ContactSubmission) -> RepositoryResult<()>;
    fn record_subscription(&self, subscription: &Subscription) -> RepositoryResult<()>;
    fn record_research_application(
        &self,
        application: &ResearchApplication,
    ) -> RepositoryResult<()>;
}

/// Serves the compiled-in content and logs submissions.
///
/// No backend receives the forms yet, so accepted submissions end in the
/// application log.
#[derive(Clone, Copy, Debug)]
pub struct StaticRepository {
    articles: &'static [Article],
    faq_sections: &'static [FaqSection],
}

impl StaticRepository {
    pub fn new(articles: &'static [Article], faq_sections: &'static [FaqSection]) -> Self {
        Self {
            articles,
            faq_sections,
        }
    }
}

impl Default for StaticRepository {
    fn default() -> Self {
        Self::new(content::ARTICLES, content::FAQ_SECTIONS)
    }
}

impl ArticleReader for StaticRepository {
    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)> {
        let matching = match query.search.as_deref() {
            Some(term) => filter_articles(self.articles, term),
            None => self.articles.to_vec(),
        };
        let total = matching.len();

        let items = match query.pagination {
            Some(Pagination { page, per_page }) => paginate(&matching, page, per_page).to_vec(),
            None => matching,
        };

        Ok((total, items))
    }
}

impl FaqReader for StaticRepository {
    fn list_faq_sections(&self) -> RepositoryResult<Vec<FaqSection>> {
        Ok(self.faq_sections.to_vec())
    }
}

impl SubmissionWriter for StaticRepository {
    fn record_contact_submission(&self, submission: &ContactSubmission) -> RepositoryResult<()> {
        log::info!(
            "Form submitted: id={} subject={} from {} {} <{}> phone={} message={:?}",
            submission.id,
            submission.subject,
            submission.first_name,
            submission.last_name,
            submission.email,
            submission.phone_number,
            submission.message.as_str(),
        );
        Ok(())
    }

    fn record_subscription(&self, subscription: &Subscription) -> RepositoryResult<()> {
        log::info!(
            "Newsletter subscription: id={} email={}",
            subscription.id,
            subscription.email
        );
        Ok(())
    }

    fn record_research_application(
        &self,
        application: &ResearchApplication,
    ) -> RepositoryResult<()> {
        log::info!(
            "Research application: id={} from {} {} <{}> field={} categories={}",
            application.id,
            application.first_name,
            application.last_name,
            application.email,
            application.field,
            application.categories,
        );
        Ok(())
    }
}
