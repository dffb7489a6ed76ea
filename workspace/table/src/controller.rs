use common::{ApiError, ListResponse, PaginationMeta};
use tracing::{debug, trace, warn};

use crate::query::{QueryState, TableConfig};

/// Identifies one issued fetch. Tokens increase monotonically per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A fetch the caller must execute: the query snapshot plus its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub query: QueryState,
}

/// One page of rows returned by the remote source.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub rows: Vec<R>,
    pub meta: PaginationMeta,
}

impl<R> From<ListResponse<R>> for Page<R> {
    fn from(response: ListResponse<R>) -> Self {
        Self {
            rows: response.data,
            meta: response.meta.pagination,
        }
    }
}

/// What [`TableController::resolve`] did with a fetch result.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Rows and metadata were replaced.
    Applied,
    /// A newer request superseded this one; the result was dropped.
    Stale,
    /// The current request failed; previous rows are kept.
    Failed(ApiError),
}

/// Owns the query parameters of a paginated table and the rows last fetched
/// for them.
///
/// Every action that changes the [`QueryState`] returns a [`FetchTicket`].
/// Results are fed back through [`resolve`](Self::resolve), which only
/// accepts the most recently issued ticket, so a slow response for an old
/// query can never overwrite rows of a newer one.
#[derive(Debug)]
pub struct TableController<R> {
    query: QueryState,
    rows: Vec<R>,
    meta: Option<PaginationMeta>,
    loading: bool,
    issued: u64,
    in_flight: Option<RequestToken>,
}

impl<R> TableController<R> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            query: QueryState::new(&config),
            rows: Vec::new(),
            meta: None,
            loading: false,
            issued: 0,
            in_flight: None,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// True until the first successful fetch has been applied.
    pub fn is_initial_load(&self) -> bool {
        self.meta.is_none()
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> Option<FetchTicket> {
        let text = text.into();
        self.update(move |query| {
            query.search_text = text;
            query.page = 1;
        })
    }

    pub fn set_sort(&mut self, key: &str) -> Option<FetchTicket> {
        self.update(|query| {
            query.select_sort(key);
            query.page = 1;
        })
    }

    /// Jumps to `page`. Only the lower bound is enforced; pages past the end
    /// are left for the source to reject or answer with an empty page.
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        self.update(|query| query.page = page.max(1))
    }

    pub fn set_type_filter(&mut self, value: impl Into<String>) -> Option<FetchTicket> {
        let value = value.into();
        self.update(move |query| {
            query.type_filter = value;
            query.page = 1;
        })
    }

    pub fn set_status_filter(&mut self, value: impl Into<String>) -> Option<FetchTicket> {
        let value = value.into();
        self.update(move |query| {
            query.status_filter = value;
            query.page = 1;
        })
    }

    /// Re-fetches the current query unchanged.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Applies the result of a ticket if it is still the latest one.
    pub fn resolve(&mut self, token: RequestToken, result: Result<Page<R>, ApiError>) -> Resolution {
        if self.in_flight != Some(token) {
            debug!(
                token = token.value(),
                latest = self.issued,
                "Dropping superseded table response"
            );
            return Resolution::Stale;
        }

        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(page) => {
                trace!(
                    token = token.value(),
                    rows = page.rows.len(),
                    total = page.meta.total,
                    "Applying table response"
                );
                self.rows = page.rows;
                self.meta = Some(page.meta);
                Resolution::Applied
            }
            Err(err) => {
                warn!(token = token.value(), %err, "Table fetch failed, keeping previous rows");
                Resolution::Failed(err)
            }
        }
    }

    fn update(&mut self, change: impl FnOnce(&mut QueryState)) -> Option<FetchTicket> {
        let before = self.query.clone();
        change(&mut self.query);
        if self.query == before {
            trace!("Query unchanged, no fetch scheduled");
            return None;
        }
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.in_flight = Some(token);
        self.loading = true;
        debug!(token = token.value(), query = ?self.query, "Scheduling table fetch");
        FetchTicket {
            token,
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;
    use common::PaginationLinks;

    fn page_of(rows: Vec<u32>, current_page: u32) -> Page<u32> {
        Page {
            meta: PaginationMeta {
                total: 42,
                count: rows.len() as u64,
                per_page: 10,
                current_page,
                total_pages: 5,
                links: PaginationLinks::default(),
            },
            rows,
        }
    }

    fn controller() -> TableController<u32> {
        TableController::new(TableConfig::default())
    }

    #[test]
    fn test_sort_cycles_on_same_key() {
        let mut table = controller();

        let directions: Vec<SortDirection> = (0..4)
            .map(|_| {
                table.set_sort("amount").expect("Sort change should schedule a fetch");
                table.query().sort_direction
            })
            .collect();

        assert_eq!(
            directions,
            vec![
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::None,
                SortDirection::Ascending,
            ]
        );
    }

    #[test]
    fn test_sort_switching_key_resets_to_ascending() {
        let mut table = controller();
        table.set_sort("amount");
        table.set_sort("amount");
        table.set_sort("date");

        assert_eq!(table.query().sort_key.as_deref(), Some("date"));
        assert_eq!(table.query().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_query_actions_reset_page() {
        let mut table = controller();

        table.set_page(4);
        table.set_search("rent");
        assert_eq!(table.query().page, 1);

        table.set_page(4);
        table.set_sort("amount");
        assert_eq!(table.query().page, 1);

        table.set_page(4);
        table.set_type_filter("DEBIT");
        assert_eq!(table.query().page, 1);

        table.set_page(4);
        table.set_status_filter("FAILED");
        assert_eq!(table.query().page, 1);
    }

    #[test]
    fn test_set_page_is_not_clamped_to_total() {
        let mut table = controller();
        let ticket = table.refresh();
        table.resolve(ticket.token, Ok(page_of(vec![1, 2], 1)));

        let ticket = table.set_page(99).expect("Page change should schedule a fetch");
        assert_eq!(ticket.query.page, 99);
        assert_eq!(table.set_page(0).map(|t| t.query.page), Some(1));
    }

    #[test]
    fn test_unchanged_query_schedules_nothing() {
        let mut table = controller();
        assert!(table.set_search("").is_none());
        assert!(table.set_page(1).is_none());
        assert!(table.set_type_filter("").is_none());
        assert!(!table.loading());
    }

    #[test]
    fn test_refresh_reissues_same_query() {
        let mut table = controller();
        let first = table.refresh();
        let second = table.refresh();

        assert_eq!(first.query, second.query);
        assert!(second.token > first.token);
        assert_eq!(table.resolve(first.token, Ok(page_of(vec![1], 1))), Resolution::Stale);
        assert_eq!(table.resolve(second.token, Ok(page_of(vec![2], 1))), Resolution::Applied);
        assert_eq!(table.rows(), &[2]);
    }

    #[test]
    fn test_refresh_retries_failed_query_unchanged() {
        let mut table = controller();
        table.set_search("rent");
        table.set_sort("amount");
        table.set_type_filter("DEBIT");
        table.set_status_filter("FAILED");
        let failed = table.set_page(3).expect("Page change should schedule a fetch");
        let expected = table.query().clone();

        let err = ApiError::Network("offline".to_string());
        assert_eq!(table.resolve(failed.token, Err(err.clone())), Resolution::Failed(err));

        let retry = table.refresh();
        assert_eq!(retry.query, expected);
        assert_eq!(retry.query.page, 3);
        assert_eq!(retry.query.search_text, "rent");
        assert_eq!(table.query(), &expected);
        assert_eq!(table.resolve(retry.token, Ok(page_of(vec![7, 8], 3))), Resolution::Applied);
        assert_eq!(table.rows(), &[7, 8]);
    }

    #[test]
    fn test_stale_response_never_overwrites_newer_rows() {
        let mut table = controller();
        let a = table.set_search("a").unwrap();
        let b = table.set_search("b").unwrap();

        assert_eq!(table.resolve(b.token, Ok(page_of(vec![20, 21], 1))), Resolution::Applied);
        assert_eq!(table.resolve(a.token, Ok(page_of(vec![10, 11], 1))), Resolution::Stale);

        assert_eq!(table.rows(), &[20, 21]);
        assert_eq!(table.query().search_text, "b");
        assert!(!table.loading());
    }

    #[test]
    fn test_stale_response_before_newer_keeps_loading() {
        let mut table = controller();
        let a = table.set_search("a").unwrap();
        let _b = table.set_search("b").unwrap();

        assert_eq!(table.resolve(a.token, Ok(page_of(vec![10], 1))), Resolution::Stale);
        assert!(table.loading());
        assert!(table.rows().is_empty());
        assert!(table.is_initial_load());
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut table = controller();
        let first = table.refresh();
        table.resolve(first.token, Ok(page_of(vec![1, 2, 3], 1)));

        let next = table.set_page(2).unwrap();
        let err = ApiError::Network("offline".to_string());
        assert_eq!(table.resolve(next.token, Err(err.clone())), Resolution::Failed(err));

        assert_eq!(table.rows(), &[1, 2, 3]);
        assert_eq!(table.meta().map(|m| m.current_page), Some(1));
        assert!(!table.loading());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut table = controller();
        let a = table.set_search("a").unwrap();
        let b = table.set_search("b").unwrap();

        let resolution = table.resolve(a.token, Err(ApiError::Network("timeout".to_string())));
        assert_eq!(resolution, Resolution::Stale);
        assert_eq!(table.resolve(b.token, Ok(page_of(vec![5], 1))), Resolution::Applied);
    }

    #[test]
    fn test_duplicate_resolution_is_stale() {
        let mut table = controller();
        let ticket = table.refresh();
        assert_eq!(table.resolve(ticket.token, Ok(page_of(vec![1], 1))), Resolution::Applied);
        assert_eq!(table.resolve(ticket.token, Ok(page_of(vec![9], 1))), Resolution::Stale);
        assert_eq!(table.rows(), &[1]);
    }

    #[test]
    fn test_meta_replaced_wholesale() {
        let mut table = controller();
        let first = table.refresh();
        table.resolve(first.token, Ok(page_of(vec![1], 1)));

        let second = table.set_page(3).unwrap();
        let mut page = page_of(vec![7], 3);
        page.meta.total = 30;
        page.meta.links.prev = Some("page=2".to_string());
        table.resolve(second.token, Ok(page));

        let meta = table.meta().unwrap();
        assert_eq!(meta.current_page, 3);
        assert_eq!(meta.total, 30);
        assert_eq!(meta.links.prev.as_deref(), Some("page=2"));
    }
}
