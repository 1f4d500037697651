use super::model::{Page, Published};
use crate::infrastructure::fetch::FetchError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Produces one page of a feed given the cursor of the previous page.
///
/// Implementations issue their requests through the resilient client, so
/// any error returned here has already been retried as far as it will be.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Self::Item>, FetchError>;
}

/// Walks a reverse-chronological paginated feed.
///
/// Pages are requested strictly in order because each cursor comes from
/// the previous response. No state survives between runs.
#[derive(Debug, Clone, Copy)]
pub struct WindowedCollector {
    max_items: usize,
}

impl WindowedCollector {
    pub fn new(max_items: usize) -> Self {
        Self { max_items }
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Collect every item published at or after `cutoff`, newest first.
    ///
    /// Never returns more than `max_items`. Stops when the feed runs out of
    /// pages, when `max_items` have been collected, or as soon as a page ends with an item older than the
    /// cutoff. The last rule relies on the feed being sorted newest first.
    /// Any page failure discards what was collected so far.
    pub async fn collect_since<S>(
        &self,
        source: &S,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<S::Item>, FetchError>
    where
        S: PageSource + ?Sized,
        S::Item: Published,
    {
        let mut collected = Vec::new();
        let mut seen_cursors = HashSet::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = source.fetch_page(cursor.as_deref()).await?;
            pages += 1;

            let crossed_cutoff = page
                .items
                .last()
                .is_some_and(|item| item.published_at() < cutoff);

            let remaining = self.max_items.saturating_sub(collected.len());
            collected.extend(
                page.items
                    .into_iter()
                    .filter(|item| item.published_at() >= cutoff)
                    .take(remaining),
            );

            if crossed_cutoff {
                tracing::debug!(pages, collected = collected.len(), "Feed crossed cutoff, stopping early");
                break;
            }

            if collected.len() >= self.max_items {
                tracing::debug!(pages, collected = collected.len(), max_items = self.max_items, "Item cap reached");
                break;
            }

            match advance(page.next_cursor, &mut seen_cursors) {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::info!(pages, collected = collected.len(), cutoff = %cutoff, "Windowed collection finished");
        Ok(collected)
    }

    /// Scan every page for the first item matching `predicate`.
    ///
    /// Returns `Ok(None)` only after the cursor chain is exhausted.
    pub async fn find_first<S, P>(
        &self,
        source: &S,
        mut predicate: P,
    ) -> Result<Option<S::Item>, FetchError>
    where
        S: PageSource + ?Sized,
        P: FnMut(&S::Item) -> bool + Send,
    {
        let mut seen_cursors = HashSet::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = source.fetch_page(cursor.as_deref()).await?;
            pages += 1;

            if let Some(found) = page.items.into_iter().find(|item| predicate(item)) {
                tracing::debug!(pages, "Lookup matched");
                return Ok(Some(found));
            }

            match advance(page.next_cursor, &mut seen_cursors) {
                Some(next) => cursor = Some(next),
                None => {
                    tracing::debug!(pages, "Lookup exhausted all pages without a match");
                    return Ok(None);
                }
            }
        }
    }
}

/// Next cursor to request, or `None` when pagination must stop
fn advance(next: Option<String>, seen: &mut HashSet<String>) -> Option<String> {
    let token = next.filter(|token| !token.is_empty())?;
    if !seen.insert(token.clone()) {
        tracing::warn!(cursor = %token, "Page token repeated, stopping pagination");
        return None;
    }
    Some(token)
}
