use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One article as delivered by the upstream search feed. Identity is the
/// `url` when present; malformed feed items may carry none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub source: Option<ArticleSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: Option<String>,
}

impl Article {
    /// Navigation identifier derived from the url, or None for items
    /// without one (they cannot be addressed by a detail view).
    pub fn id(&self) -> Option<String> {
        self.url.as_deref().filter(|u| !u.is_empty()).map(article_id)
    }

    /// Body text for a detail view: full content when the feed provides
    /// it, otherwise the description.
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().or(self.description.as_deref())
    }
}

/// Percent-encoded form of an article url, used to address the detail
/// view across navigation and reloads.
pub fn article_id(url: &str) -> String {
    urlencoding::encode(url).into_owned()
}

/// One page of accepted search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub articles: Vec<Article>,
    pub total_results: u64,
    pub page: u32,
}
