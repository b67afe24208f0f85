use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::article::{Article, SearchPage};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::session::SearchFilters;

/// The upstream search endpoint, seen from the session's side: give it
/// filters and a page number, get back one page of articles plus the
/// server's total match count.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn search(&self, filters: &SearchFilters, page: u32) -> Result<SearchPage, SearchError>;
}

/// Wire shape of the upstream response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default, rename = "totalResults")]
    total_results: u64,
    #[serde(default)]
    message: Option<String>,
}

/// reqwest-backed repository for the NewsAPI "everything" endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: Client,
    config: SearchConfig,
}

impl NewsApiClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Use an already-configured HTTP client (shared pools, custom
    /// redirect policy).
    pub fn with_client(http: Client, config: SearchConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl ArticleRepository for NewsApiClient {
    async fn search(&self, filters: &SearchFilters, page: u32) -> Result<SearchPage, SearchError> {
        let keyword = filters.keyword.trim();
        if keyword.is_empty() {
            return Err(SearchError::EmptyKeyword);
        }
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(SearchError::MissingCredential);
        };

        let mut query: Vec<(&str, String)> = vec![
            ("q", keyword.to_string()),
            ("apiKey", api_key.to_string()),
            ("pageSize", self.config.page_size.to_string()),
            ("page", page.to_string()),
            ("sortBy", self.config.sort_by.clone()),
            ("language", self.config.language.clone()),
        ];
        if let Some(from) = filters.from {
            query.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = filters.to {
            query.push(("to", to.format("%Y-%m-%d").to_string()));
        }

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Transport {
                status: status.as_u16(),
            });
        }

        let payload: SearchResponse = response.json().await?;
        if payload.status != "ok" {
            return Err(SearchError::Upstream(payload.message.unwrap_or_else(
                || "unable to load data from the news feed".to_string(),
            )));
        }

        Ok(SearchPage {
            articles: payload.articles,
            total_results: payload.total_results,
            page,
        })
    }
}
