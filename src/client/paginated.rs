//! Paginated, cancellable page streams.
//!
//! List endpoints are walked by a background task that fetches one page per
//! round and publishes it through a bounded channel. The caller consumes the
//! pages from a [`Pages`] handle, which is also a [`Stream`], and can stop
//! the walk at any time with [`Pages::cancel`] or a detached
//! [`CancelHandle`].
//!
//! Price and time estimates use the same shape in single-shot mode: one
//! fetch, one page, then the stream closes.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::ClientInner;
use crate::{Error, Result};

/// Default number of items requested per page.
pub const DEFAULT_LIMIT_PER_PAGE: u32 = 10;

/// Type alias for a boxed future used internally.
pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One batch of items from a paginated endpoint.
///
/// A page carrying an `error` is always the last one on its stream.
#[derive(Debug)]
pub struct Page<T> {
    /// 1-based number of this page
    pub page_number: u64,
    /// Offset the page was fetched at
    pub offset: u64,
    /// The items
    pub items: Vec<T>,
    /// Set when fetching this page failed
    pub error: Option<Error>,
}

impl<T> Page<T> {
    /// Returns `true` if fetching this page failed.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// The items, or the error that ended the stream.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.items),
        }
    }
}

/// Controls how a paginated endpoint is walked.
///
/// Zero values mean "use the default": ten items per page, no cap on the
/// number of pages.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use uber_rs::PageQuery;
///
/// let query = PageQuery::new()
///     .with_limit_per_page(50)
///     .with_max_pages(3)
///     .with_throttle(Duration::from_millis(250));
/// assert_eq!(query.limit(), 50);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Items to request per page; 0 means [`DEFAULT_LIMIT_PER_PAGE`]
    pub limit_per_page: u32,
    /// Stop after this many pages; 0 means no limit
    pub max_page_number: u32,
    /// Delay between two fetches; `None` fetches back to back
    pub throttle: Option<Duration>,
    /// Offset of the first fetch
    pub start_offset: u64,
}

impl PageQuery {
    /// Create a query with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of items per page.
    pub fn with_limit_per_page(mut self, limit: u32) -> Self {
        self.limit_per_page = limit;
        self
    }

    /// Cap the number of pages.
    pub fn with_max_pages(mut self, max: u32) -> Self {
        self.max_page_number = max;
        self
    }

    /// Wait `throttle` between fetches.
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = Some(throttle);
        self
    }

    /// Start at `offset` instead of the first item.
    pub fn with_start_offset(mut self, offset: u64) -> Self {
        self.start_offset = offset;
        self
    }

    /// The effective page size.
    pub fn limit(&self) -> u32 {
        if self.limit_per_page == 0 {
            DEFAULT_LIMIT_PER_PAGE
        } else {
            self.limit_per_page
        }
    }
}

/// The window of items requested by one fetch.
///
/// Serialized as the `offset` and `limit` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Index of the first item
    pub offset: u64,
    /// Maximum number of items
    pub limit: u32,
}

/// Where a walk is. Owned by the paginator task alone.
#[derive(Debug)]
struct PaginationState {
    offset: u64,
    page_number: u64,
    more: bool,
}

impl PaginationState {
    fn new(start_offset: u64) -> Self {
        Self {
            offset: start_offset,
            page_number: 0,
            more: true,
        }
    }

    fn request(&self, limit: u32) -> PageRequest {
        PageRequest {
            offset: self.offset,
            limit,
        }
    }

    /// Record a successful fetch of `count` items.
    fn advance(&mut self, count: usize) {
        self.offset += count as u64;
        self.page_number += 1;
    }
}

/// Stops a page stream. Cloneable and idempotent.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    fn new() -> Self {
        Self::default()
    }

    /// Stop the stream. No page is delivered after this returns.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// The receiving end of a paginated call.
///
/// # Example
///
/// ```no_run
/// use uber_rs::{PageQuery, UberClient};
///
/// # async fn example(client: UberClient) -> uber_rs::Result<()> {
/// let mut pages = client
///     .drivers()
///     .payments(Some(PageQuery::new().with_max_pages(2)))?;
///
/// while let Some(page) = pages.next_page().await {
///     for payment in page.into_result()? {
///         println!("{} {}", payment.payment_id, payment.amount);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Pages<T> {
    rx: mpsc::Receiver<Page<T>>,
    cancel: CancelHandle,
}

impl<T> Pages<T> {
    /// Wait for the next page. `None` once the stream is exhausted or cancelled.
    pub async fn next_page(&mut self) -> Option<Page<T>> {
        std::future::poll_fn(|cx| Pin::new(&mut *self).poll_next(cx)).await
    }

    /// Stop the stream.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A handle that cancels this stream from elsewhere.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Drain the stream, failing on the first error page.
    pub async fn collect_items(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await {
            items.extend(page.into_result()?);
        }
        Ok(items)
    }
}

impl<T> Stream for Pages<T> {
    type Item = Page<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.cancel.is_cancelled() {
            this.rx.close();
            return Poll::Ready(None);
        }

        match this.rx.poll_recv(cx) {
            // A page may have been buffered before the cancel landed.
            Poll::Ready(Some(_)) if this.cancel.is_cancelled() => {
                this.rx.close();
                Poll::Ready(None)
            }
            other => other,
        }
    }
}

impl<T> Unpin for Pages<T> {}

impl<T> std::fmt::Debug for Pages<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pages")
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

/// Drives fetch rounds on a background task.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Paginator {
    query: PageQuery,
    single_shot: bool,
}

impl Paginator {
    pub(crate) fn new(query: Option<PageQuery>) -> Self {
        Self {
            query: query.unwrap_or_default(),
            single_shot: false,
        }
    }

    /// Exactly one fetch, published even when empty.
    pub(crate) fn single_shot() -> Self {
        Self {
            query: PageQuery::new().with_max_pages(1),
            single_shot: true,
        }
    }

    /// Start walking with `fetch` on the current Tokio runtime.
    pub(crate) fn spawn<T, F, Fut>(self, fetch: F) -> Result<Pages<T>>
    where
        T: Send + 'static,
        F: FnMut(PageRequest) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
    {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| Error::Config("paginated calls need a Tokio runtime".to_string()))?;

        let (tx, rx) = mpsc::channel(1);
        let cancel = CancelHandle::new();
        runtime.spawn(self.run(fetch, tx, cancel.token.clone()));

        Ok(Pages { rx, cancel })
    }

    async fn run<T, F, Fut>(
        self,
        mut fetch: F,
        tx: mpsc::Sender<Page<T>>,
        cancel: CancellationToken,
    ) where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let limit = self.query.limit();
        let max_pages = u64::from(self.query.max_page_number);
        let mut state = PaginationState::new(self.query.start_offset);

        while state.more {
            if state.page_number > 0 {
                if let Some(throttle) = self.query.throttle {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => break,
                        _ = tokio::time::sleep(throttle) => {}
                    }
                }
            }

            if cancel.is_cancelled() {
                tracing::debug!(page = state.page_number, "page stream cancelled");
                break;
            }

            let request = state.request(limit);
            tracing::trace!(
                offset = request.offset,
                limit = request.limit,
                page = state.page_number + 1,
                "fetching page"
            );

            let page = match fetch(request).await {
                Ok(items) if items.is_empty() && !self.single_shot => break,
                Ok(items) => {
                    state.advance(items.len());
                    if max_pages > 0 && state.page_number >= max_pages {
                        state.more = false;
                    }
                    Page {
                        page_number: state.page_number,
                        offset: request.offset,
                        items,
                        error: None,
                    }
                }
                Err(err) => {
                    tracing::debug!(offset = request.offset, error = %err, "page stream failed");
                    state.more = false;
                    Page {
                        page_number: state.page_number + 1,
                        offset: request.offset,
                        items: Vec::new(),
                        error: Some(err),
                    }
                }
            };

            if !publish(&tx, &cancel, page).await {
                tracing::debug!(page = state.page_number, "page stream closed by receiver");
                break;
            }
        }
    }
}

/// Send a page unless the stream is cancelled or the receiver is gone.
async fn publish<T>(tx: &mpsc::Sender<Page<T>>, cancel: &CancellationToken, page: Page<T>) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        sent = tx.send(page) => sent.is_ok(),
    }
}

/// Body of every list endpoint: a single array under an endpoint-specific key.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(
        default = "Vec::new",
        alias = "payments",
        alias = "trips",
        alias = "deliveries",
        alias = "history",
        alias = "prices",
        alias = "times",
        alias = "products"
    )]
    pub(crate) items: Vec<T>,
}

/// Builder for page streams over one endpoint.
pub(crate) struct PagesBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    paginator: Paginator,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PagesBuilder<T> {
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            paginator: Paginator::new(None),
            _marker: PhantomData,
        }
    }

    /// Walk with `offset` and `limit` parameters.
    pub(crate) fn page_query(mut self, query: Option<PageQuery>) -> Self {
        self.paginator = Paginator::new(query);
        self
    }

    /// Fetch once, without pagination parameters.
    pub(crate) fn single_shot(mut self) -> Self {
        self.paginator = Paginator::single_shot();
        self
    }

    /// Spawn the stream, adding `query` to every request.
    pub(crate) fn build_with_query<Q>(self, query: Option<Q>) -> Result<Pages<T>>
    where
        Q: Serialize + Clone + Send + Sync + 'static,
    {
        self.inner.require_token()?;

        let inner = self.inner;
        let path = self.path;
        let paginated = !self.paginator.single_shot;

        self.paginator.spawn(move |page: PageRequest| {
            let inner = inner.clone();
            let path = path.clone();
            let query = query.clone();

            let fut: BoxFuture<'static, Result<Vec<T>>> = Box::pin(async move {
                #[derive(Serialize)]
                struct PaginationQuery<Q> {
                    #[serde(flatten)]
                    page: Option<PageRequest>,
                    #[serde(flatten)]
                    extra: Option<Q>,
                }

                let pagination_query = PaginationQuery {
                    page: paginated.then_some(page),
                    extra: query,
                };

                let response: ListResponse<T> =
                    inner.get_with_query(&path, &pagination_query).await?;
                Ok(response.items)
            });
            fut
        })
    }

    /// Spawn the stream without additional query parameters.
    pub(crate) fn build(self) -> Result<Pages<T>> {
        self.build_with_query::<()>(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    type Fetches = Arc<Mutex<Vec<PageRequest>>>;

    /// A source of `total` numbered items.
    fn numbers(
        total: u64,
        fetches: Fetches,
    ) -> impl FnMut(PageRequest) -> BoxFuture<'static, Result<Vec<u64>>> + Send + 'static {
        move |request| {
            fetches.lock().unwrap().push(request);
            let start = request.offset.min(total);
            let end = (request.offset + u64::from(request.limit)).min(total);
            let items: Vec<u64> = (start..end).collect();
            Box::pin(async move { Ok(items) })
        }
    }

    /// A source that returns pages of the given sizes, then nothing.
    fn scripted(
        sizes: Vec<usize>,
        fetches: Fetches,
    ) -> impl FnMut(PageRequest) -> BoxFuture<'static, Result<Vec<u64>>> + Send + 'static {
        let calls = AtomicUsize::new(0);
        move |request| {
            fetches.lock().unwrap().push(request);
            let size = sizes
                .get(calls.fetch_add(1, Ordering::SeqCst))
                .copied()
                .unwrap_or(0);
            let items: Vec<u64> = (request.offset..request.offset + size as u64).collect();
            Box::pin(async move { Ok(items) })
        }
    }

    async fn drain(mut pages: Pages<u64>) -> Vec<Page<u64>> {
        let mut out = Vec::new();
        while let Some(page) = pages.next_page().await {
            out.push(page);
        }
        out
    }

    fn query(limit: u32, max: u32) -> Option<PageQuery> {
        Some(PageQuery::new().with_limit_per_page(limit).with_max_pages(max))
    }

    // =========================================================================
    // Page walking
    // =========================================================================

    #[tokio::test]
    async fn test_walks_until_empty_page() {
        let fetches = Fetches::default();
        let pages = Paginator::new(query(2, 0))
            .spawn(numbers(10, fetches.clone()))
            .unwrap();

        let pages = drain(pages).await;
        assert_eq!(pages.len(), 5);
        assert_eq!(pages.iter().map(|p| p.items.len()).sum::<usize>(), 10);
        assert_eq!(
            pages.iter().map(|p| p.offset).collect::<Vec<_>>(),
            vec![0, 2, 4, 6, 8]
        );
        assert_eq!(
            pages.iter().map(|p| p.page_number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );

        let offsets: Vec<u64> = fetches.lock().unwrap().iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 2, 4, 6, 8, 10]);
    }

    #[tokio::test]
    async fn test_page_cap_stops_fetching() {
        let fetches = Fetches::default();
        let pages = Paginator::new(query(2, 3))
            .spawn(numbers(10, fetches.clone()))
            .unwrap();

        let pages = drain(pages).await;
        assert_eq!(pages.len(), 3);
        assert_eq!(pages.iter().map(|p| p.items.len()).sum::<usize>(), 6);
        assert_eq!(
            pages.iter().map(|p| p.offset).collect::<Vec<_>>(),
            vec![0, 2, 4]
        );
        assert_eq!(fetches.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_page_count_formula() {
        // (total, limit, max pages, expected pages)
        let cases = [
            (25, 10, 0, 3),
            (25, 2, 1, 1),
            (25, 2, 3, 3),
            (20, 10, 0, 2),
            (20, 10, 5, 2),
            (1, 10, 0, 1),
            (0, 10, 0, 0),
            (7, 3, 2, 2),
        ];

        for (total, limit, max, expected) in cases {
            let pages = Paginator::new(query(limit, max))
                .spawn(numbers(total, Fetches::default()))
                .unwrap();
            let pages = drain(pages).await;

            assert_eq!(pages.len(), expected, "total={} limit={} max={}", total, limit, max);
            let items = pages.iter().map(|p| p.items.len() as u64).sum::<u64>();
            assert_eq!(items, (u64::from(limit) * expected as u64).min(total));
        }
    }

    #[tokio::test]
    async fn test_offset_follows_item_count() {
        let fetches = Fetches::default();
        let pages = Paginator::new(query(3, 0))
            .spawn(scripted(vec![3, 1, 2], fetches.clone()))
            .unwrap();

        let pages = drain(pages).await;
        assert_eq!(
            pages.iter().map(|p| p.offset).collect::<Vec<_>>(),
            vec![0, 3, 4]
        );
        let offsets: Vec<u64> = fetches.lock().unwrap().iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 3, 4, 6]);
    }

    #[tokio::test]
    async fn test_default_query() {
        let fetches = Fetches::default();
        let pages = Paginator::new(None)
            .spawn(numbers(25, fetches.clone()))
            .unwrap();

        assert_eq!(drain(pages).await.len(), 3);
        let first = fetches.lock().unwrap()[0];
        assert_eq!(first, PageRequest { offset: 0, limit: DEFAULT_LIMIT_PER_PAGE });
    }

    #[tokio::test]
    async fn test_start_offset() {
        let fetches = Fetches::default();
        let pages = Paginator::new(Some(PageQuery::new().with_limit_per_page(4).with_start_offset(10)))
            .spawn(numbers(16, fetches.clone()))
            .unwrap();

        let pages = drain(pages).await;
        assert_eq!(pages.iter().map(|p| p.offset).collect::<Vec<_>>(), vec![10, 14]);
        assert_eq!(pages[0].items, vec![10, 11, 12, 13]);
    }

    #[tokio::test]
    async fn test_error_page_ends_stream() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let pages = Paginator::new(query(2, 0))
            .spawn(move |request: PageRequest| {
                let call = counter.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move {
                    if call == 1 {
                        Err(Error::Transport("connection reset".to_string()))
                    } else {
                        Ok(vec![request.offset, request.offset + 1])
                    }
                }) as BoxFuture<'static, Result<Vec<u64>>>
            })
            .unwrap();

        let pages = drain(pages).await;
        assert_eq!(pages.len(), 2);
        assert!(!pages[0].is_err());
        assert!(pages[1].is_err());
        assert_eq!(pages[1].offset, 2);
        assert!(pages[1].items.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_collect_items_surfaces_error() {
        let pages = Paginator::new(None)
            .spawn(|_request: PageRequest| {
                Box::pin(async { Err(Error::Transport("boom".to_string())) })
                    as BoxFuture<'static, Result<Vec<u64>>>
            })
            .unwrap();

        assert!(matches!(pages.collect_items().await, Err(Error::Transport(_))));
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    #[tokio::test]
    async fn test_cancel_before_consuming() {
        let fetches = Fetches::default();
        let mut pages = Paginator::new(query(2, 0))
            .spawn(numbers(100, fetches.clone()))
            .unwrap();

        pages.cancel();
        assert!(pages.next_page().await.is_none());
        assert!(pages.next_page().await.is_none());

        tokio::task::yield_now().await;
        assert!(fetches.lock().unwrap().len() <= 1);
    }

    #[tokio::test]
    async fn test_cancel_drops_buffered_page() {
        let fetches = Fetches::default();
        let mut pages = Paginator::new(query(2, 0))
            .spawn(numbers(100, fetches.clone()))
            .unwrap();

        assert!(pages.next_page().await.is_some());
        // Give the task time to buffer the next page.
        tokio::task::yield_now().await;
        pages.cancel();
        assert!(pages.next_page().await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let mut pages = Paginator::new(None)
            .spawn(numbers(100, Fetches::default()))
            .unwrap();

        let handle = pages.cancel_handle();
        handle.cancel();
        handle.cancel();
        pages.cancel();

        assert!(handle.is_cancelled());
        assert!(pages.next_page().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_throttle() {
        let fetches = Fetches::default();
        let mut pages = Paginator::new(Some(
            PageQuery::new()
                .with_limit_per_page(2)
                .with_throttle(Duration::from_secs(60)),
        ))
        .spawn(numbers(100, fetches.clone()))
        .unwrap();

        assert!(pages.next_page().await.is_some());
        pages.cancel();
        assert!(pages.next_page().await.is_none());

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(fetches.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_receiver_stops_task() {
        let fetches = Fetches::default();
        let mut pages = Paginator::new(query(1, 0))
            .spawn(numbers(1_000, fetches.clone()))
            .unwrap();

        assert!(pages.next_page().await.is_some());
        drop(pages);

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(fetches.lock().unwrap().len() <= 3);
    }

    // =========================================================================
    // Throttle
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_throttle_between_rounds() {
        let fetches = Fetches::default();
        let started = tokio::time::Instant::now();
        let pages = Paginator::new(Some(
            PageQuery::new()
                .with_limit_per_page(2)
                .with_throttle(Duration::from_secs(1)),
        ))
        .spawn(numbers(6, fetches.clone()))
        .unwrap();

        assert_eq!(drain(pages).await.len(), 3);
        // Four fetches, three delays between them, none before the first.
        assert_eq!(fetches.lock().unwrap().len(), 4);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(3), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(4), "elapsed {:?}", elapsed);
    }

    // =========================================================================
    // Single shot
    // =========================================================================

    #[tokio::test]
    async fn test_single_shot_publishes_empty_page() {
        let fetches = Fetches::default();
        let pages = Paginator::single_shot()
            .spawn(numbers(0, fetches.clone()))
            .unwrap();

        let pages = drain(pages).await;
        assert_eq!(pages.len(), 1);
        assert!(pages[0].items.is_empty());
        assert!(pages[0].error.is_none());
        assert_eq!(fetches.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_single_shot_fetches_once() {
        let fetches = Fetches::default();
        let mut pages = Paginator::single_shot()
            .spawn(numbers(100, fetches.clone()))
            .unwrap();

        let page = pages.next_page().await.unwrap();
        assert_eq!(page.page_number, 1);
        pages.cancel();
        assert!(pages.next_page().await.is_none());

        tokio::task::yield_now().await;
        assert_eq!(fetches.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_spawn_without_runtime() {
        let result = Paginator::new(None).spawn(numbers(10, Fetches::default()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payment {
        payment_id: String,
    }

    #[test]
    fn test_list_response_decoding() {
        let response: ListResponse<Payment> = serde_json::from_value(serde_json::json!({
            "count": 2,
            "payments": [{ "payment_id": "payment-1" }, { "payment_id": "payment-2" }]
        }))
        .unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[1].payment_id, "payment-2");

        let empty: ListResponse<Payment> =
            serde_json::from_value(serde_json::json!({ "count": 0 })).unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_page_query_limit_default() {
        assert_eq!(PageQuery::default().limit(), DEFAULT_LIMIT_PER_PAGE);
        assert_eq!(PageQuery::new().with_limit_per_page(2).limit(), 2);
    }
}
