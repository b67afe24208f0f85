use std::time::Duration;

use chrono::NaiveDate;
use tokio::time::timeout;
use tracing::warn;

use crate::article::Article;
use crate::client::ArticleRepository;
use crate::error::SearchError;
use crate::persistence::SelectionStore;
use crate::session::{FetchTicket, SearchSession};

/// Drives the session end to end: commands issue a fetch ticket, the
/// repository call runs under a timeout, and the outcome is applied
/// back. Exactly one fetch runs per command; a newer command supersedes
/// an older one through the ticket token, so a late response can no
/// longer mutate the session.
pub struct SearchService<R, S> {
    session: SearchSession,
    repository: R,
    selection: S,
    request_timeout: Duration,
}

impl<R, S> SearchService<R, S>
where
    R: ArticleRepository,
    S: SelectionStore,
{
    pub fn new(repository: R, selection: S, request_timeout: Duration) -> Self {
        Self {
            session: SearchSession::new(),
            repository,
            selection,
            request_timeout,
        }
    }

    /// Read-only view of the session state.
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn set_keyword(&mut self, text: impl Into<String>) {
        self.session.set_keyword(text);
    }

    pub async fn submit_search(
        &mut self,
        keyword: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) {
        let ticket = self.session.submit_search(keyword, from, to);
        self.run(ticket).await;
    }

    pub async fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        let ticket = self.session.set_date_range(from, to);
        self.run(ticket).await;
    }

    pub async fn load_more(&mut self) {
        let ticket = self.session.load_more();
        self.run(ticket).await;
    }

    /// Record the article the user opened and externalize it so a
    /// reloaded detail view can find it again.
    pub async fn select_article(&mut self, article: Article) {
        self.selection.save(&article).await;
        self.session.select_article(article);
    }

    /// Resolve the article a detail view should show, in priority
    /// order: the article carried by the navigation event, the session
    /// selection, a match by identifier in the accumulated results, and
    /// finally the persisted slot. None means the view is unrecoverable
    /// and should offer a way back to the search.
    pub async fn resolve_article(
        &mut self,
        id: Option<&str>,
        navigated: Option<Article>,
    ) -> Option<Article> {
        if let Some(article) = navigated {
            self.select_article(article.clone()).await;
            return Some(article);
        }
        if let Some(article) = self.session.selected_article() {
            return Some(article.clone());
        }
        if let Some(article) = id.and_then(|id| self.session.find_by_id(id)) {
            return Some(article.clone());
        }

        let restored = self
            .selection
            .load()
            .await
            .filter(|article| match (id, article.id()) {
                (Some(requested), Some(stored)) => requested == stored,
                (Some(_), None) => false,
                (None, _) => article.url.is_some(),
            })?;
        self.session.select_article(restored.clone());
        Some(restored)
    }

    async fn run(&mut self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else { return };
        let outcome = match timeout(
            self.request_timeout,
            self.repository.search(&ticket.filters, ticket.page),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(page = ticket.page, "search request timed out");
                Err(SearchError::Timeout)
            }
        };
        self.session.apply(&ticket, outcome);
    }
}
