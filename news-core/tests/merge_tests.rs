use news_core::{has_more, merge_page, Article};

fn article(url: &str) -> Article {
    Article {
        title: format!("article {url}"),
        url: if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        },
        ..Article::default()
    }
}

fn urls(articles: &[Article]) -> Vec<&str> {
    articles
        .iter()
        .map(|a| a.url.as_deref().unwrap_or(""))
        .collect()
}

#[test]
fn first_page_replaces_accumulation_verbatim() {
    let existing = vec![article("old1"), article("old2")];
    let incoming = vec![article("new1"), article("")];

    let merged = merge_page(existing, incoming.clone(), true);
    assert_eq!(merged, incoming, "first page replaces, url-less items included");
}

#[test]
fn later_pages_append_only_unseen_urls_in_order() {
    let existing = vec![article("a"), article("b")];
    let incoming = vec![article("b"), article("c"), article("d")];

    let merged = merge_page(existing, incoming, false);
    assert_eq!(urls(&merged), vec!["a", "b", "c", "d"]);
}

#[test]
fn later_pages_drop_url_less_items() {
    let existing = vec![article("a")];
    let incoming = vec![article(""), article("b")];

    let merged = merge_page(existing, incoming, false);
    assert_eq!(urls(&merged), vec!["a", "b"]);
}

#[test]
fn merging_the_same_page_twice_is_idempotent() {
    let incoming = vec![article("x"), article("y")];
    let once = merge_page(vec![article("a")], incoming.clone(), false);
    let twice = merge_page(once.clone(), incoming, false);
    assert_eq!(once, twice);
}

#[test]
fn has_more_compares_accumulated_against_total() {
    assert!(has_more(20, 45, false));
    assert!(!has_more(45, 45, false));
    assert!(!has_more(50, 45, false));
}

#[test]
fn empty_page_forces_has_more_false_despite_total() {
    assert!(!has_more(0, 1, true));
    assert!(!has_more(20, 45, true));
}
