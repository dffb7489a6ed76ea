use async_trait::async_trait;
use common::ApiError;
use tracing::instrument;

use crate::controller::{FetchTicket, Page, RequestToken};
use crate::query::QueryState;

/// Remote source of paginated rows.
///
/// Futures are not required to be `Send`; the browser runs everything on a
/// single thread.
#[async_trait(?Send)]
pub trait PageSource {
    type Row;

    async fn fetch_page(&self, query: &QueryState) -> Result<Page<Self::Row>, ApiError>;
}

/// Runs a ticket against `source`, returning the token the result belongs to.
#[instrument(skip(source, ticket), fields(token = ticket.token.value()))]
pub async fn execute<S>(source: &S, ticket: FetchTicket) -> (RequestToken, Result<Page<S::Row>, ApiError>)
where
    S: PageSource + ?Sized,
{
    let result = source.fetch_page(&ticket.query).await;
    (ticket.token, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Resolution, TableController};
    use crate::query::TableConfig;
    use common::{PaginationLinks, PaginationMeta};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Answers after a per-search delay with rows tagged by the search text.
    struct DelayedSource {
        delays: Vec<(&'static str, u64)>,
        calls: RefCell<Vec<QueryState>>,
    }

    #[async_trait(?Send)]
    impl PageSource for DelayedSource {
        type Row = String;

        async fn fetch_page(&self, query: &QueryState) -> Result<Page<String>, ApiError> {
            self.calls.borrow_mut().push(query.clone());
            let delay = self
                .delays
                .iter()
                .find(|(search, _)| *search == query.search_text)
                .map(|(_, ms)| *ms)
                .unwrap_or(10);
            tokio::time::sleep(Duration::from_millis(delay)).await;

            if query.search_text == "broken" {
                return Err(ApiError::from_status(500));
            }
            Ok(Page {
                rows: vec![format!("row for {}", query.search_text)],
                meta: PaginationMeta {
                    total: 1,
                    count: 1,
                    per_page: query.page_size,
                    current_page: query.page,
                    total_pages: 1,
                    links: PaginationLinks::default(),
                },
            })
        }
    }

    fn spawn_fetch(
        source: Rc<DelayedSource>,
        table: Rc<RefCell<TableController<String>>>,
        ticket: FetchTicket,
        log: Rc<RefCell<Vec<(String, Resolution)>>>,
    ) {
        tokio::task::spawn_local(async move {
            let search = ticket.query.search_text.clone();
            let (token, result) = execute(source.as_ref(), ticket).await;
            let resolution = table.borrow_mut().resolve(token, result);
            log.borrow_mut().push((search, resolution));
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_order_responses_show_latest_query() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let source = Rc::new(DelayedSource {
            delays: vec![("a", 500), ("b", 50)],
            calls: RefCell::new(Vec::new()),
        });
        let table = Rc::new(RefCell::new(TableController::new(TableConfig::default())));
        let log = Rc::new(RefCell::new(Vec::new()));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let a = table.borrow_mut().set_search("a").unwrap();
                spawn_fetch(source.clone(), table.clone(), a, log.clone());
                let b = table.borrow_mut().set_search("b").unwrap();
                spawn_fetch(source.clone(), table.clone(), b, log.clone());

                tokio::time::sleep(Duration::from_secs(1)).await;
            })
            .await;

        assert_eq!(
            *log.borrow(),
            vec![
                ("b".to_string(), Resolution::Applied),
                ("a".to_string(), Resolution::Stale),
            ]
        );
        let table = table.borrow();
        assert_eq!(table.rows(), &["row for b".to_string()]);
        assert!(!table.loading());
        assert_eq!(source.calls.borrow().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_surfaces_error_and_keeps_rows() {
        let source = Rc::new(DelayedSource {
            delays: vec![],
            calls: RefCell::new(Vec::new()),
        });
        let table = Rc::new(RefCell::new(TableController::new(TableConfig::default())));

        let ticket = table.borrow_mut().refresh();
        let (token, result) = execute(source.as_ref(), ticket).await;
        assert_eq!(table.borrow_mut().resolve(token, result), Resolution::Applied);

        let ticket = table.borrow_mut().set_search("broken").unwrap();
        let (token, result) = execute(source.as_ref(), ticket).await;
        let resolution = table.borrow_mut().resolve(token, result);

        assert_eq!(resolution, Resolution::Failed(ApiError::from_status(500)));
        let table = table.borrow();
        assert_eq!(table.rows(), &["row for ".to_string()]);
        assert!(!table.loading());
    }
}
