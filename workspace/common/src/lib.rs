//! Common transport-layer types shared by the table core and the frontend.
//! These structs mirror the transactions API payloads so the frontend can
//! deserialize responses without duplicating shapes.

mod error;
pub mod format;
mod summary;
mod upload;

pub use error::{ApiError, Result};
pub use summary::StatementSummary;
pub use upload::{validate_statement_file, UploadSummary};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Success envelope returned by every endpoint: `{status, data}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<u16>,
    pub data: T,
}

/// Error envelope: `{status, error, message, details?}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<std::collections::BTreeMap<String, String>>,
}

// ===================== Transactions =====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Credit, TransactionType::Debit];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Credit => "CREDIT",
            TransactionType::Debit => "DEBIT",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Success,
        TransactionStatus::Failed,
        TransactionStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Pending => "PENDING",
        }
    }

    /// Failed and pending transactions are reported as issues.
    pub fn is_issue(&self) -> bool {
        !matches!(self, TransactionStatus::Success)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bank statement line as returned by `GET /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDto {
    pub id: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount in whole currency units, always non-negative. The sign comes from `transaction_type`.
    pub amount: i64,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TransactionDto {
    pub fn signed_amount(&self) -> i64 {
        match self.transaction_type {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        }
    }
}

// ===================== Pagination =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaginationLinks {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Server-reported position of the current page within the whole result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub total: u64,
    /// Items on the current page.
    pub count: u64,
    pub per_page: u32,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub links: PaginationLinks,
}

impl PaginationMeta {
    /// One-based index of the first item shown, 0 when the result set is empty.
    pub fn first_item(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (self.current_page.max(1) as u64 - 1) * self.per_page as u64 + 1
    }

    /// One-based index of the last item shown.
    pub fn last_item(&self) -> u64 {
        (self.current_page as u64 * self.per_page as u64).min(self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortMeta {
    pub by: String,
    pub order: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseMeta {
    pub pagination: PaginationMeta,
    #[serde(default)]
    pub sort: Option<SortMeta>,
}

/// Paginated list payload carried inside [`ApiEnvelope::data`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
    pub meta: ResponseMeta,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ===================== Balance =====================

/// Balance computed server-side from successful transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BalanceDto {
    pub balance: i64,
    pub credits: i64,
    pub debits: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(total: u64, per_page: u32, current_page: u32) -> PaginationMeta {
        PaginationMeta {
            total,
            count: 0,
            per_page,
            current_page,
            total_pages: ((total + per_page as u64 - 1) / per_page as u64) as u32,
            links: PaginationLinks::default(),
        }
    }

    #[test]
    fn test_decode_transaction_list() {
        let body = r#"{
            "status": 200,
            "data": {
                "message": "Transactions retrieved successfully",
                "data": [
                    {"id": "tx-1", "timestamp": 1700000000, "name": "ACME", "type": "CREDIT",
                     "amount": 150000, "status": "SUCCESS", "description": "salary",
                     "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"}
                ],
                "meta": {
                    "pagination": {"total": 21, "count": 1, "per_page": 10, "current_page": 1,
                                   "total_pages": 3, "links": {"next": "page=2", "prev": null}},
                    "filters": {"status": ""},
                    "sort": {"by": "timestamp", "order": "DESC"}
                }
            }
        }"#;

        let envelope: ApiEnvelope<ListResponse<TransactionDto>> =
            serde_json::from_str(body).expect("Should decode list envelope");

        assert_eq!(envelope.status, Some(200));
        let list = envelope.data;
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].transaction_type, TransactionType::Credit);
        assert_eq!(list.data[0].status, TransactionStatus::Success);
        assert_eq!(list.meta.pagination.total_pages, 3);
        assert_eq!(list.meta.pagination.links.next.as_deref(), Some("page=2"));
        assert_eq!(list.meta.sort.unwrap().order, "DESC");
    }

    #[test]
    fn test_decode_null_data_as_empty() {
        let body = r#"{"data": null, "meta": {"pagination":
            {"total": 0, "count": 0, "per_page": 10, "current_page": 1, "total_pages": 1}}}"#;

        let list: ListResponse<TransactionDto> = serde_json::from_str(body).unwrap();
        assert!(list.data.is_empty());
        assert_eq!(list.meta.pagination.links, PaginationLinks::default());
    }

    #[test]
    fn test_signed_amount() {
        let mut tx = TransactionDto {
            id: "a".to_string(),
            timestamp: 0,
            name: "n".to_string(),
            transaction_type: TransactionType::Debit,
            amount: 500,
            status: TransactionStatus::Pending,
            description: String::new(),
            created_at: None,
        };
        assert_eq!(tx.signed_amount(), -500);
        tx.transaction_type = TransactionType::Credit;
        assert_eq!(tx.signed_amount(), 500);
    }

    #[test]
    fn test_pagination_item_range() {
        let m = meta(25, 10, 3);
        assert_eq!(m.first_item(), 21);
        assert_eq!(m.last_item(), 25);
        assert!(m.has_previous());
        assert!(!m.has_next());

        let empty = meta(0, 10, 1);
        assert_eq!(empty.first_item(), 0);
        assert_eq!(empty.last_item(), 0);
    }

    #[test]
    fn test_status_issue_flag() {
        assert!(!TransactionStatus::Success.is_issue());
        assert!(TransactionStatus::Failed.is_issue());
        assert!(TransactionStatus::Pending.is_issue());
        assert_eq!(TransactionStatus::Pending.to_string(), "PENDING");
    }
}
