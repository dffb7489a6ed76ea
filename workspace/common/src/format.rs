//! Display formatting for statement values.
//!
//! Amounts are whole rupiah, rendered with dot thousands separators and no
//! fraction digits. Timestamps are unix seconds rendered in UTC.

use chrono::DateTime;

use crate::TransactionDto;

const CURRENCY_SYMBOL: &str = "Rp";

/// Formats an amount as currency, e.g. `Rp 1.500.000` or `-Rp 25.000`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} {}", sign, CURRENCY_SYMBOL, group_thousands(amount.unsigned_abs()))
}

/// Formats a row amount with an explicit sign taken from its type.
pub fn format_signed_amount(transaction: &TransactionDto) -> String {
    let signed = transaction.signed_amount();
    let prefix = if signed >= 0 { "+" } else { "-" };
    format!("{}{} {}", prefix, CURRENCY_SYMBOL, group_thousands(signed.unsigned_abs()))
}

/// Formats a unix timestamp as `Jan 5, 2024, 09:30 AM`.
pub fn format_timestamp(seconds: i64) -> String {
    match DateTime::from_timestamp(seconds, 0) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => "-".to_string(),
    }
}

/// Formats a byte count with a binary unit, e.g. `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[unit])
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransactionStatus, TransactionType};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "Rp 0");
        assert_eq!(format_currency(999), "Rp 999");
        assert_eq!(format_currency(1000), "Rp 1.000");
        assert_eq!(format_currency(1_500_000), "Rp 1.500.000");
        assert_eq!(format_currency(-25_000), "-Rp 25.000");
    }

    #[test]
    fn test_format_signed_amount() {
        let tx = TransactionDto {
            id: "1".to_string(),
            timestamp: 0,
            name: "Coffee".to_string(),
            transaction_type: TransactionType::Debit,
            amount: 45_000,
            status: TransactionStatus::Success,
            description: String::new(),
            created_at: None,
        };
        assert_eq!(format_signed_amount(&tx), "-Rp 45.000");

        let credit = TransactionDto {
            transaction_type: TransactionType::Credit,
            ..tx
        };
        assert_eq!(format_signed_amount(&credit), "+Rp 45.000");
    }

    #[test]
    fn test_format_timestamp() {
        // 2024-01-05T09:30:00Z
        assert_eq!(format_timestamp(1_704_447_000), "Jan 5, 2024, 09:30 AM");
        assert_eq!(format_timestamp(i64::MAX), "-");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    }
}
