use std::time::Duration;

use async_trait::async_trait;
use news_core::{
    article_id, Article, ArticleRepository, MemorySelectionStore, SearchError, SearchFilters,
    SearchPage, SearchService, SelectionStore,
};

fn article(url: &str, title: &str) -> Article {
    Article {
        title: title.into(),
        url: Some(url.into()),
        ..Article::default()
    }
}

/// Repository that answers every request with the same page.
struct FixedRepository(SearchPage);

#[async_trait]
impl ArticleRepository for FixedRepository {
    async fn search(&self, _filters: &SearchFilters, _page: u32) -> Result<SearchPage, SearchError> {
        Ok(self.0.clone())
    }
}

fn service_with_slot(
    slot: MemorySelectionStore,
    articles: Vec<Article>,
) -> SearchService<FixedRepository, MemorySelectionStore> {
    let repo = FixedRepository(SearchPage {
        total_results: articles.len() as u64,
        articles,
        page: 1,
    });
    SearchService::new(repo, slot, Duration::from_secs(5))
}

#[tokio::test]
async fn navigation_payload_wins_and_is_persisted() {
    let slot = MemorySelectionStore::new();
    let mut svc = service_with_slot(slot.clone(), vec![]);

    let navigated = article("https://example.com/a", "A");
    let resolved = svc
        .resolve_article(Some(&article_id("https://example.com/a")), Some(navigated.clone()))
        .await;

    assert_eq!(resolved, Some(navigated.clone()));
    assert_eq!(svc.session().selected_article(), Some(&navigated));
    assert_eq!(slot.load().await, Some(navigated), "selection externalized");
}

#[tokio::test]
async fn session_selection_wins_over_result_list() {
    let listed = article("https://example.com/a", "from list");
    let selected = article("https://example.com/b", "selected");
    let mut svc = service_with_slot(MemorySelectionStore::new(), vec![listed]);

    svc.submit_search("acme", None, None).await;
    svc.select_article(selected.clone()).await;

    let resolved = svc
        .resolve_article(Some(&article_id("https://example.com/a")), None)
        .await;
    assert_eq!(resolved, Some(selected));
}

#[tokio::test]
async fn result_list_resolves_by_identifier() {
    let listed = article("https://example.com/a?x=1", "from list");
    let mut svc = service_with_slot(MemorySelectionStore::new(), vec![listed.clone()]);

    svc.submit_search("acme", None, None).await;

    let resolved = svc
        .resolve_article(Some(&article_id("https://example.com/a?x=1")), None)
        .await;
    assert_eq!(resolved, Some(listed));
}

#[tokio::test]
async fn persisted_slot_is_the_last_resort() {
    let slot = MemorySelectionStore::new();
    let remembered = article("https://example.com/a", "remembered");
    slot.save(&remembered).await;

    // Fresh service, empty session: only the slot can answer.
    let mut svc = service_with_slot(slot, vec![]);
    let resolved = svc
        .resolve_article(Some(&article_id("https://example.com/a")), None)
        .await;

    assert_eq!(resolved, Some(remembered.clone()));
    assert_eq!(
        svc.session().selected_article(),
        Some(&remembered),
        "restored selection lands back in the session"
    );
}

#[tokio::test]
async fn slot_entry_for_a_different_article_does_not_resolve() {
    let slot = MemorySelectionStore::new();
    slot.save(&article("https://example.com/other", "other")).await;

    let mut svc = service_with_slot(slot, vec![]);
    let resolved = svc
        .resolve_article(Some(&article_id("https://example.com/a")), None)
        .await;

    assert_eq!(resolved, None, "terminal view state, not a silent mismatch");
}

#[tokio::test]
async fn nothing_to_resolve_yields_none() {
    let mut svc = service_with_slot(MemorySelectionStore::new(), vec![]);
    let resolved = svc.resolve_article(Some("whatever"), None).await;
    assert_eq!(resolved, None);
}
