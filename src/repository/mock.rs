//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::article::Article;
use crate::domain::contact::{ContactSubmission, Subscription};
use crate::domain::page::FaqSection;
use crate::domain::research::ResearchApplication;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ArticleListQuery, ArticleReader, FaqReader, SubmissionWriter};

mock! {
    pub Repository {}

    impl ArticleReader for Repository {
        fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)>;
    }

    impl FaqReader for Repository {
        fn list_faq_sections(&self) -> RepositoryResult<Vec<FaqSection>>;
    }

    impl SubmissionWriter for Repository {
        fn record_contact_submission(&self, submission: &ContactSubmission) -> RepositoryResult<()>;
        fn record_subscription(&self, subscription: &Subscription) -> RepositoryResult<()>;
        fn record_research_application(
            &self,
            application: &ResearchApplication,
        ) -> RepositoryResult<()>;
    }
}
