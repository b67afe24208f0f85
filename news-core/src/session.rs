use chrono::NaiveDate;
use tracing::{debug, info};

use crate::article::{Article, SearchPage};
use crate::error::SearchError;
use crate::merge::{has_more, merge_page};

/// Committed search filters. Changing any field resets pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilters {
    pub keyword: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// A fetch the session has agreed to run. The token fences the
/// response: only the most recently issued ticket may still mutate the
/// session when it resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub filters: SearchFilters,
    pub page: u32,
}

/// The one mutable aggregate of the search feature: filters, the
/// accumulated result list, pagination cursor, status and the current
/// selection. Lives for the whole session and is only ever mutated
/// through the command methods below, each of which is synchronous and
/// total.
#[derive(Debug, Default)]
pub struct SearchSession {
    keyword_input: String,
    filters: SearchFilters,
    page: u32,
    results: Vec<Article>,
    total_results: u64,
    status: SearchStatus,
    error: Option<String>,
    has_more: bool,
    selected_article: Option<Article>,
    next_token: u64,
    inflight_token: Option<u64>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    /// Store the uncommitted keyword the user is typing. Does not touch
    /// filters, pagination or results; only `submit_search` commits.
    pub fn set_keyword(&mut self, text: impl Into<String>) {
        self.keyword_input = text.into();
    }

    /// Commit filters and ask for page 1. An empty keyword instead
    /// clears the session back to idle and requests nothing.
    pub fn submit_search(
        &mut self,
        keyword: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Option<FetchTicket> {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            self.keyword_input.clear();
            self.clear();
            return None;
        }

        self.keyword_input = trimmed.to_string();
        self.filters = SearchFilters {
            keyword: trimmed.to_string(),
            from,
            to,
        };
        self.page = 1;
        info!(keyword = %self.filters.keyword, "new search submitted");
        Some(self.issue(1))
    }

    /// Change the date range. Re-fetches page 1 immediately when a
    /// keyword is committed; with no keyword there is nothing to search
    /// yet, so only the filters move.
    pub fn set_date_range(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Option<FetchTicket> {
        self.filters.from = from;
        self.filters.to = to;
        self.page = 1;
        if self.filters.keyword.is_empty() {
            return None;
        }
        Some(self.issue(1))
    }

    /// Ask for the next page. A no-op while a fetch is outstanding or
    /// when the last page told us there is nothing more; the visibility
    /// trigger may fire this repeatedly and relies on that guard.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.status == SearchStatus::Loading || !self.has_more {
            debug!(status = ?self.status, has_more = self.has_more, "load_more ignored");
            return None;
        }
        Some(self.issue(self.page + 1))
    }

    pub fn select_article(&mut self, article: Article) {
        self.selected_article = Some(article);
    }

    /// Resolve a fetch outcome against the session. Outcomes from
    /// superseded tickets are discarded so a stale page can never merge
    /// under filters it was not requested for.
    pub fn apply(&mut self, ticket: &FetchTicket, outcome: Result<SearchPage, SearchError>) {
        if self.inflight_token != Some(ticket.token) {
            debug!(token = ticket.token, "discarding superseded fetch outcome");
            return;
        }
        self.inflight_token = None;

        match outcome {
            Ok(page_data) => {
                let first_page = page_data.page == 1;
                let page_empty = page_data.articles.is_empty();
                self.status = SearchStatus::Succeeded;
                self.total_results = page_data.total_results;
                self.page = page_data.page;
                self.results =
                    merge_page(std::mem::take(&mut self.results), page_data.articles, first_page);
                self.has_more = has_more(self.results.len(), self.total_results, page_empty);
            }
            Err(err) => {
                self.status = SearchStatus::Failed;
                self.error = Some(err.to_string());
            }
        }
    }

    /// A human-readable line describing where the search stands.
    pub fn summary(&self) -> String {
        if self.filters.keyword.is_empty() {
            return "Enter a keyword above to find matching articles.".to_string();
        }
        if self.status == SearchStatus::Succeeded && self.total_results > 0 {
            return format!("Found {} matching articles.", self.total_results);
        }
        if self.status == SearchStatus::Failed {
            if let Some(error) = &self.error {
                return error.clone();
            }
        }
        "Check back for the latest articles.".to_string()
    }

    /// Find an accumulated article by its navigation identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Article> {
        self.results
            .iter()
            .find(|article| article.id().as_deref() == Some(id))
    }

    pub fn keyword_input(&self) -> &str {
        &self.keyword_input
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[Article] {
        &self.results
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.selected_article.as_ref()
    }

    fn issue(&mut self, page: u32) -> FetchTicket {
        let token = self.next_token;
        self.next_token += 1;
        self.inflight_token = Some(token);
        self.status = SearchStatus::Loading;
        self.error = None;
        if page == 1 {
            // Stale content disappears as soon as a new search starts,
            // not only once its response arrives.
            self.results.clear();
            self.has_more = false;
        }
        FetchTicket {
            token,
            filters: self.filters.clone(),
            page,
        }
    }

    fn clear(&mut self) {
        self.filters = SearchFilters::default();
        self.results.clear();
        self.total_results = 0;
        self.page = 1;
        self.has_more = false;
        self.status = SearchStatus::Idle;
        self.error = None;
        self.inflight_token = None;
    }
}
