use std::collections::HashSet;

use bi_core::NewsItem;

/// Drop duplicate news items by exact URL match, keeping the first
/// occurrence and the original relative order. URLs are compared as-is:
/// no case folding, no trailing-slash or query-string normalization.
/// Items without a URL share a single key, so only the first survives.
pub fn dedup_news_by_url(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen: HashSet<Option<String>> = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.url.clone()))
        .collect()
}
