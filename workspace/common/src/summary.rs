use serde::{Deserialize, Serialize};

use crate::{BalanceDto, TransactionDto, TransactionStatus, TransactionType};

/// Figures shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatementSummary {
    /// Successful credits minus successful debits.
    pub balance: i64,
    pub credits: i64,
    pub debits: i64,
    /// Failed or pending transactions.
    pub issues: u64,
}

impl StatementSummary {
    /// Computes the summary from the rows currently loaded.
    pub fn from_rows(rows: &[TransactionDto]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            if row.status.is_issue() {
                summary.issues += 1;
            }
            if row.status != TransactionStatus::Success {
                continue;
            }
            match row.transaction_type {
                TransactionType::Credit => summary.credits += row.amount,
                TransactionType::Debit => summary.debits += row.amount,
            }
        }
        summary.balance = summary.credits - summary.debits;
        summary
    }

    /// Prefers server-side figures when they are available.
    pub fn with_remote(self, balance: Option<BalanceDto>, issues: Option<u64>) -> Self {
        let mut merged = self;
        if let Some(remote) = balance {
            merged.balance = remote.balance;
            merged.credits = remote.credits;
            merged.debits = remote.debits;
        }
        if let Some(issues) = issues {
            merged.issues = issues;
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, transaction_type: TransactionType, amount: i64, status: TransactionStatus) -> TransactionDto {
        TransactionDto {
            id: id.to_string(),
            timestamp: 1_700_000_000,
            name: format!("row {}", id),
            transaction_type,
            amount,
            status,
            description: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_summary_counts_only_successful_amounts() {
        let rows = vec![
            row("1", TransactionType::Credit, 1_000, TransactionStatus::Success),
            row("2", TransactionType::Debit, 300, TransactionStatus::Success),
            row("3", TransactionType::Credit, 5_000, TransactionStatus::Failed),
            row("4", TransactionType::Debit, 200, TransactionStatus::Pending),
        ];

        let summary = StatementSummary::from_rows(&rows);
        assert_eq!(summary.credits, 1_000);
        assert_eq!(summary.debits, 300);
        assert_eq!(summary.balance, 700);
        assert_eq!(summary.issues, 2);
    }

    #[test]
    fn test_remote_figures_take_precedence() {
        let local = StatementSummary::from_rows(&[row("1", TransactionType::Credit, 10, TransactionStatus::Success)]);
        let remote = BalanceDto { balance: 900, credits: 1_000, debits: 100 };

        let merged = local.with_remote(Some(remote), Some(7));
        assert_eq!(merged.balance, 900);
        assert_eq!(merged.issues, 7);

        let unchanged = local.with_remote(None, None);
        assert_eq!(unchanged, local);
    }
}
