use async_trait::async_trait;
use common::{ApiError, BalanceDto, ListResponse, TransactionDto};
use table::{Page, PageSource, QueryState};
use crate::api_client;

/// Fetch one page of transactions for the given table query
pub async fn fetch_transactions(query: &QueryState) -> Result<ListResponse<TransactionDto>, ApiError> {
    log::trace!("Fetching transactions page {}", query.page);
    let result = api_client::get::<ListResponse<TransactionDto>>("/transactions", &query.to_query_params()).await;
    match &result {
        Ok(list) => log::info!(
            "Fetched {} of {} transactions",
            list.data.len(),
            list.meta.pagination.total
        ),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}

/// Get the balance over all successful transactions
pub async fn fetch_balance() -> Result<BalanceDto, ApiError> {
    log::trace!("Fetching balance");
    api_client::get::<BalanceDto>("/balance", &[]).await
}

/// Get the number of failed or pending transactions
pub async fn fetch_issues_count() -> Result<u64, ApiError> {
    log::trace!("Fetching issues count");
    let params = [("page", "1".to_string()), ("page_size", "1".to_string())];
    let list = api_client::get::<ListResponse<TransactionDto>>("/issues", &params).await?;
    Ok(list.meta.pagination.total)
}

/// [`PageSource`] backed by `GET /transactions`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransactionSource;

#[async_trait(?Send)]
impl PageSource for TransactionSource {
    type Row = TransactionDto;

    async fn fetch_page(&self, query: &QueryState) -> Result<Page<TransactionDto>, ApiError> {
        fetch_transactions(query).await.map(Page::from)
    }
}
