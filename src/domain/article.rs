//! Blog articles and the free-text filter applied to them.

use serde::Serialize;

/// A static article record shown as a card on the blog and landing pages.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Article {
    /// Path to the thumbnail image.
    pub thumbnail: &'static str,
    /// Category label, e.g. "Education". Searched.
    pub label: &'static str,
    /// Path to the author's avatar.
    pub author_img: &'static str,
    /// Author display name. Searched.
    pub author_name: &'static str,
    /// Publication date and reading time, preformatted.
    pub date: &'static str,
    /// Headline. Searched.
    pub title: &'static str,
    /// One or two sentence teaser.
    pub preview: &'static str,
    /// Link to the full article.
    pub read_more_link: &'static str,
}

impl Article {
    /// Returns `true` when the case-folded `needle` is contained in the
    /// label, title or author name. An empty needle matches everything.
    ///
    /// `needle` must already be lower-cased; see [`ArticleFilter`].
    fn contains_folded(&self, needle: &str) -> bool {
        [self.label, self.title, self.author_name]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Case-insensitive substring filter over label, title and author.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    needle: String,
}

impl ArticleFilter {
    /// Builds a filter for the raw query as typed by the visitor.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether the filter admits every article.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, article: &Article) -> bool {
        article.contains_folded(&self.needle)
    }
}

/// Keeps the articles matching `query`, preserving their order.
pub fn filter_articles(articles: &[Article], query: &str) -> Vec<Article> {
    let filter = ArticleFilter::new(query);
    articles
        .iter()
        .filter(|article| filter.matches(article))
        .copied()
        .collect()
}
