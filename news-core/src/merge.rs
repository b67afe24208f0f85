use std::collections::HashSet;

use crate::article::Article;

/// Merge a freshly fetched page into the accumulated result list.
///
/// A first page replaces the accumulation verbatim, including items
/// without a url (no identity requirement has been established yet).
/// Later pages append, keeping incoming order, but only items whose url
/// is non-empty and not already present; url-less items are dropped
/// because they can be neither deduplicated nor addressed later.
pub fn merge_page(existing: Vec<Article>, incoming: Vec<Article>, is_first_page: bool) -> Vec<Article> {
    if is_first_page {
        return incoming;
    }

    let known: HashSet<&str> = existing
        .iter()
        .filter_map(|article| article.url.as_deref())
        .filter(|url| !url.is_empty())
        .collect();

    let fresh: Vec<Article> = incoming
        .into_iter()
        .filter(|article| {
            article
                .url
                .as_deref()
                .is_some_and(|url| !url.is_empty() && !known.contains(url))
        })
        .collect();

    let mut merged = existing;
    merged.extend(fresh);
    merged
}

/// Whether another page is worth requesting. A zero-item page always
/// means no, even when the server-reported total disagrees with what
/// was accumulated (the upstream count is not trustworthy).
pub fn has_more(accumulated: usize, total_results: u64, last_page_empty: bool) -> bool {
    !last_page_empty && (accumulated as u64) < total_results
}
