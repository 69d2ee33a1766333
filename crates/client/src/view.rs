//! Cached, sortable view over paged fetches.
//!
//! [`CollectionView`] keeps one window of fetched rows per
//! [`FilterSignature`]. Reads for a signature already in the cache are
//! served locally, so retyping the same search term costs nothing.
//! Thread-safe via interior locks; designed to be shared behind the
//! collection facades.

use std::collections::HashMap;
use std::sync::Arc;

use leadhq_core::pagination::DEFAULT_PAGE_SIZE;
use tokio::sync::{Mutex, RwLock};

use crate::http::{ClientError, PageFetcher};
use crate::records::{PageEnvelope, SortableRecord};

// ---------------------------------------------------------------------------
// Filter signature
// ---------------------------------------------------------------------------

/// Cache key: the server-side filters that select which rows a window
/// holds. Two requests with the same signature share one window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterSignature {
    /// Substring search, or `None` for all rows.
    pub search: Option<String>,
    /// Status filter, or `None` for all statuses.
    pub status: Option<String>,
    /// Page size sent as `limit`.
    pub limit: i64,
}

impl Default for FilterSignature {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Direction of the active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction. Selecting the same column repeatedly
    /// cycles ascending, descending, ascending.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone)]
struct Sort {
    column: String,
    direction: SortDirection,
}

// ---------------------------------------------------------------------------
// Page window
// ---------------------------------------------------------------------------

/// Rows fetched so far for one filter signature.
struct PageWindow<T> {
    rows: Vec<T>,
    /// Next page to request; 1 means nothing has been fetched yet.
    next_page: i64,
    has_more: bool,
    sort: Option<Sort>,
}

impl<T> Default for PageWindow<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_page: 1,
            has_more: true,
            sort: None,
        }
    }
}

impl<T: SortableRecord> PageWindow<T> {
    fn append(&mut self, envelope: PageEnvelope<T>) {
        self.has_more = envelope.pagination.has_more;
        self.next_page += 1;
        self.rows.extend(envelope.data);
        self.resort();
    }

    fn toggle_sort(&mut self, column: &str) {
        let direction = match &self.sort {
            Some(sort) if sort.column == column => sort.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(Sort {
            column: column.to_string(),
            direction,
        });
        self.resort();
    }

    fn resort(&mut self) {
        let Some(sort) = self.sort.clone() else {
            return;
        };
        match sort.direction {
            SortDirection::Ascending => self.rows.sort_by(|a, b| a.compare_by(b, &sort.column)),
            SortDirection::Descending => self
                .rows
                .sort_by(|a, b| a.compare_by(b, &sort.column).reverse()),
        }
    }
}

// ---------------------------------------------------------------------------
// Collection view
// ---------------------------------------------------------------------------

/// Per-signature cache of fetched pages with client-side sorting.
///
/// Each window sits behind its own lock, held across the fetch, so two
/// concurrent "load more" calls against the same signature line up and
/// append distinct pages instead of both appending the same one.
/// Sorting only reorders rows already in hand; rows not yet fetched are
/// invisible to it.
pub struct CollectionView<T, F> {
    fetcher: F,
    windows: RwLock<HashMap<FilterSignature, Arc<Mutex<PageWindow<T>>>>>,
}

impl<T, F> CollectionView<T, F>
where
    T: SortableRecord + Clone + Send,
    F: PageFetcher<T>,
{
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            windows: RwLock::new(HashMap::new()),
        }
    }

    /// Window for the signature, creating an empty one on first sight.
    async fn window(&self, signature: &FilterSignature) -> Arc<Mutex<PageWindow<T>>> {
        if let Some(window) = self.windows.read().await.get(signature) {
            return window.clone();
        }
        self.windows
            .write()
            .await
            .entry(signature.clone())
            .or_default()
            .clone()
    }

    /// Rows for the signature, fetching the first page if the window is
    /// still empty. Repeat calls with the same signature serve the
    /// cache without touching the server.
    pub async fn ensure_first_page(
        &self,
        signature: &FilterSignature,
    ) -> Result<Vec<T>, ClientError> {
        let window = self.window(signature).await;
        let mut window = window.lock().await;
        if window.next_page == 1 {
            tracing::debug!(?signature, "Fetching first page");
            let envelope = self.fetcher.fetch_page(signature, 1).await?;
            window.append(envelope);
        }
        Ok(window.rows.clone())
    }

    /// Fetch and append the next page. Returns `Ok(false)` without a
    /// fetch when the server already reported the last page.
    pub async fn load_more(&self, signature: &FilterSignature) -> Result<bool, ClientError> {
        let window = self.window(signature).await;
        let mut window = window.lock().await;
        if !window.has_more {
            return Ok(false);
        }
        let page = window.next_page;
        tracing::debug!(?signature, page, "Fetching next page");
        let envelope = self.fetcher.fetch_page(signature, page).await?;
        window.append(envelope);
        Ok(true)
    }

    /// Currently cached rows for the signature, in display order.
    pub async fn rows(&self, signature: &FilterSignature) -> Vec<T> {
        let window = self.window(signature).await;
        let window = window.lock().await;
        window.rows.clone()
    }

    /// Whether the server reported more pages beyond what is cached.
    pub async fn has_more(&self, signature: &FilterSignature) -> bool {
        let window = self.window(signature).await;
        let window = window.lock().await;
        window.has_more
    }

    /// Select a sort column and return the reordered rows. The first
    /// selection sorts ascending; selecting the same column again
    /// toggles the direction. A different column starts over ascending.
    pub async fn sort_by(&self, signature: &FilterSignature, column: &str) -> Vec<T> {
        let window = self.window(signature).await;
        let mut window = window.lock().await;
        window.toggle_sort(column);
        window.rows.clone()
    }

    /// Drop every cached window. Mutations call this so the next read
    /// refetches from the server instead of patching rows in place.
    pub async fn invalidate_all(&self) {
        self.windows.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::records::PageInfo;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: String,
    }

    impl SortableRecord for Row {
        fn compare_by(&self, other: &Self, column: &str) -> Ordering {
            match column {
                "id" => self.id.cmp(&other.id),
                "label" => self.label.cmp(&other.label),
                _ => Ordering::Equal,
            }
        }
    }

    /// Serves synthetic pages and records which page numbers were
    /// requested. The sleep widens the race window between concurrent
    /// callers.
    struct CountingFetcher {
        total_pages: i64,
        requested: StdMutex<Vec<i64>>,
    }

    impl CountingFetcher {
        fn new(total_pages: i64) -> Self {
            Self {
                total_pages,
                requested: StdMutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageFetcher<Row> for CountingFetcher {
        async fn fetch_page(
            &self,
            signature: &FilterSignature,
            page: i64,
        ) -> Result<PageEnvelope<Row>, ClientError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.requested.lock().unwrap().push(page);
            let first = (page - 1) * signature.limit + 1;
            let data = (first..first + signature.limit)
                .map(|id| Row {
                    id,
                    label: format!("row-{id:03}"),
                })
                .collect();
            Ok(PageEnvelope {
                data,
                pagination: PageInfo {
                    page,
                    limit: signature.limit,
                    has_more: page < self.total_pages,
                    total: self.total_pages * signature.limit,
                },
            })
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher<Row> for FailingFetcher {
        async fn fetch_page(
            &self,
            _signature: &FilterSignature,
            _page: i64,
        ) -> Result<PageEnvelope<Row>, ClientError> {
            Err(ClientError::Api {
                status: 500,
                message: "Internal server error".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn first_page_is_fetched_once_and_cached() {
        let view = CollectionView::new(CountingFetcher::new(3));
        let signature = FilterSignature::default();

        let rows = view.ensure_first_page(&signature).await.unwrap();
        assert_eq!(rows.len(), 10);

        let again = view.ensure_first_page(&signature).await.unwrap();
        assert_eq!(again.len(), 10);
        assert_eq!(view.fetcher.requested.lock().unwrap().as_slice(), &[1]);
    }

    #[tokio::test]
    async fn concurrent_load_more_appends_distinct_pages() {
        let view = CollectionView::new(CountingFetcher::new(5));
        let signature = FilterSignature::default();
        view.ensure_first_page(&signature).await.unwrap();

        let (a, b) = tokio::join!(view.load_more(&signature), view.load_more(&signature));
        assert!(a.unwrap());
        assert!(b.unwrap());

        // Each call must have requested a distinct page.
        assert_eq!(
            view.fetcher.requested.lock().unwrap().as_slice(),
            &[1, 2, 3]
        );

        let rows = view.rows(&signature).await;
        assert_eq!(rows.len(), 30);
        let mut ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 30, "no page may be appended twice");
    }

    #[tokio::test]
    async fn load_more_stops_at_last_page() {
        let view = CollectionView::new(CountingFetcher::new(2));
        let signature = FilterSignature::default();
        view.ensure_first_page(&signature).await.unwrap();

        assert!(view.load_more(&signature).await.unwrap());
        assert!(!view.has_more(&signature).await);

        // The refused call must not reach the fetcher.
        assert!(!view.load_more(&signature).await.unwrap());
        assert_eq!(view.fetcher.requested.lock().unwrap().as_slice(), &[1, 2]);
    }

    #[tokio::test]
    async fn sort_toggles_direction_and_resets_on_new_column() {
        let view = CollectionView::new(CountingFetcher::new(1));
        let signature = FilterSignature::default();
        view.ensure_first_page(&signature).await.unwrap();

        let asc = view.sort_by(&signature, "id").await;
        assert_eq!(asc.first().unwrap().id, 1);
        assert_eq!(asc.last().unwrap().id, 10);

        let desc = view.sort_by(&signature, "id").await;
        assert_eq!(desc.first().unwrap().id, 10);
        assert_eq!(desc.last().unwrap().id, 1);

        // A different column starts over ascending.
        let relabeled = view.sort_by(&signature, "label").await;
        assert_eq!(relabeled.first().unwrap().label, "row-001");
    }

    #[tokio::test]
    async fn appended_page_respects_active_sort() {
        let view = CollectionView::new(CountingFetcher::new(3));
        let signature = FilterSignature::default();
        view.ensure_first_page(&signature).await.unwrap();

        view.sort_by(&signature, "id").await;
        view.sort_by(&signature, "id").await; // descending
        view.load_more(&signature).await.unwrap();

        let rows = view.rows(&signature).await;
        assert_eq!(rows.first().unwrap().id, 20);
        assert_eq!(rows.last().unwrap().id, 1);
    }

    #[tokio::test]
    async fn invalidate_all_forces_refetch() {
        let view = CollectionView::new(CountingFetcher::new(3));
        let signature = FilterSignature::default();
        view.ensure_first_page(&signature).await.unwrap();

        view.invalidate_all().await;
        view.ensure_first_page(&signature).await.unwrap();

        assert_eq!(view.fetcher.requested.lock().unwrap().as_slice(), &[1, 1]);
    }

    #[tokio::test]
    async fn distinct_signatures_get_distinct_windows() {
        let view = CollectionView::new(CountingFetcher::new(3));
        let all = FilterSignature::default();
        let filtered = FilterSignature {
            search: Some("acme".to_string()),
            ..FilterSignature::default()
        };

        view.ensure_first_page(&all).await.unwrap();
        view.ensure_first_page(&filtered).await.unwrap();
        view.load_more(&all).await.unwrap();

        assert_eq!(view.rows(&all).await.len(), 20);
        assert_eq!(view.rows(&filtered).await.len(), 10);
    }

    #[tokio::test]
    async fn fetch_error_leaves_window_empty() {
        let view = CollectionView::new(FailingFetcher);
        let signature = FilterSignature::default();

        let err = view.ensure_first_page(&signature).await.unwrap_err();
        assert_matches!(err, ClientError::Api { status: 500, .. });

        // The failed fetch must not advance the window.
        assert!(view.rows(&signature).await.is_empty());
        assert!(view.has_more(&signature).await);
    }
}
