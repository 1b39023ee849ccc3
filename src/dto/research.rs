use crate::domain::article::Article;
use crate::domain::page::{ResearchPlan, SectionHeader};
use crate::forms::research::{ApplicationErrors, FormFieldConfig, ResearchApplicationForm};

/// Data required to render the fund-research template.
pub struct FundResearchPageData {
    pub header: SectionHeader,
    pub plans: &'static [ResearchPlan],
    pub articles: Vec<Article>,
    /// Inputs of the "apply below" form, in display order.
    pub fields: &'static [FormFieldConfig],
    pub form: ResearchApplicationForm,
    pub errors: ApplicationErrors,
}
