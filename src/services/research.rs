use crate::content;
use crate::domain::research::ResearchApplication;
use crate::dto::research::FundResearchPageData;
use crate::forms::research::{APPLICATION_FIELDS, ApplicationErrors, ResearchApplicationForm};
use crate::repository::{ArticleReader, SubmissionWriter};
use crate::services::main::featured_articles;
use crate::services::{ServiceError, ServiceResult};

/// Fund-research page with the application form filled from `form`.
pub fn load_fund_research_page<R>(
    repo: &R,
    form: ResearchApplicationForm,
    errors: ApplicationErrors,
) -> ServiceResult<FundResearchPageData>
where
    R: ArticleReader + ?Sized,
{
    Ok(FundResearchPageData {
        header: content::FUND_RESEARCH_HEADER,
        plans: content::RESEARCH_PLANS,
        articles: featured_articles(repo)?,
        fields: APPLICATION_FIELDS,
        form,
        errors,
    })
}

/// Validates the application form and records the application.
pub fn submit_application<R>(
    repo: &R,
    form: &ResearchApplicationForm,
) -> ServiceResult<ResearchApplication>
where
    R: SubmissionWriter + ?Sized,
{
    let application =
        ResearchApplication::try_from(form).map_err(ServiceError::ApplicationValidation)?;

    repo.record_research_application(&application)
        .map_err(|err| {
            log::error!("Failed to record research application: {err}");
            ServiceError::from(err)
        })?;

    Ok(application)
}
