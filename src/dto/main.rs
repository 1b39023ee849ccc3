use crate::domain::article::Article;
use crate::domain::page::{
    CallToAction, FaqSection, FeatureCard, Hero, LeaderboardEntry, Metric, SectionHeader, Signup,
    Statement, University,
};

/// Data required to render the home page.
pub struct HomePageData {
    pub hero: Hero,
    pub specialization: SectionHeader,
    pub career_fields: &'static [&'static str],
    /// First few articles of the blog.
    pub articles: Vec<Article>,
    pub fund_research: CallToAction,
    pub choose_us: CallToAction,
    pub reasons: &'static [FeatureCard],
    pub leaderboard: &'static [LeaderboardEntry],
    pub universities: &'static [University],
}

/// Data required to render the about page.
pub struct AboutPageData {
    pub header: SectionHeader,
    pub set_us_apart: &'static [FeatureCard],
    pub statements: &'static [Statement],
    pub articles: Vec<Article>,
    pub success_numbers: &'static [Metric],
}

/// Data required to render the FAQ page.
pub struct FaqPageData {
    pub sections: Vec<FaqSection>,
}

/// Data required to render the signup page.
pub struct SignupPageData {
    pub signup: Signup,
}
