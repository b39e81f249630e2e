//! Accounting transaction data models and API request types.
//!
//! This module defines:
//! - `AccountingTransaction`: database entity for a transaction header
//! - `TransactionLine`: one debit/credit line within a transaction
//! - Request and filter types for the transaction endpoints

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a transaction header from the database.
///
/// # Database Table
///
/// Maps to the `accounting_transactions` table. Each transaction:
/// - Has a generated human-readable number (`TXN-<unix-epoch>`)
/// - Stores its total in cents (never floats!)
/// - Is created atomically with its lines; total debits equal total
///   credits at creation time, exactly
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AccountingTransaction {
    /// Unique identifier for this transaction
    pub id: Uuid,

    /// Generated document number, unique
    pub transaction_number: String,

    /// The date the financial event occurred (not the insert time)
    pub transaction_date: NaiveDate,

    /// Optional link to an originating document kind (invoice, payment, ...)
    pub reference_type: Option<String>,

    /// Optional id of the originating document
    pub reference_id: Option<Uuid>,

    /// Human-readable description
    pub description: Option<String>,

    /// Total amount in cents; equals the sum of debits across lines
    pub total_cents: i64,

    /// Currency code (ISO 4217)
    pub currency: String,

    /// Transaction status; only "posted" rows count toward reports
    pub status: String,

    /// When the row was created
    pub created_at: DateTime<Utc>,

    /// When the row was last updated
    pub updated_at: DateTime<Utc>,
}

/// One line of a transaction: a debit or credit against an account.
///
/// Typically exactly one of `debit_cents`/`credit_cents` is nonzero,
/// but only the aggregate per header is enforced.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionLine {
    /// Account being debited or credited
    pub account_id: Uuid,

    /// Debit amount in cents
    #[serde(default)]
    pub debit_cents: i64,

    /// Credit amount in cents
    #[serde(default)]
    pub credit_cents: i64,

    /// Optional line description
    pub description: Option<String>,
}

/// Request body for creating a transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "transaction_date": "2025-01-15",
///   "description": "Office supplies",
///   "lines": [
///     {"account_id": "...", "debit_cents": 10000},
///     {"account_id": "...", "credit_cents": 10000}
///   ]
/// }
/// ```
///
/// # Validation
///
/// - `transaction_date`: required
/// - `lines`: at least one
/// - sum of debits must equal sum of credits, exactly
/// - `currency`: optional, defaults to "USD"
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub transaction_date: NaiveDate,

    pub description: Option<String>,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub lines: Vec<TransactionLine>,
}

/// Default currency value when not specified in the request.
fn default_currency() -> String {
    "USD".to_string()
}

/// Query parameters for `GET /transactions`.
#[derive(Debug, Deserialize)]
pub struct TransactionListQuery {
    /// Inclusive start of the date-range filter
    pub start_date: Option<NaiveDate>,

    /// Inclusive end of the date-range filter
    pub end_date: Option<NaiveDate>,

    /// Exact status filter (`?status=posted`)
    pub status: Option<String>,

    /// Page size, defaults to 100
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// Sum debits and credits across a set of lines.
///
/// Returns `(total_debit_cents, total_credit_cents)`. Integer cents
/// make the double-entry check an exact equality, never a tolerance.
pub fn line_totals(lines: &[TransactionLine]) -> (i64, i64) {
    lines.iter().fold((0, 0), |(debits, credits), line| {
        (debits + line.debit_cents, credits + line.credit_cents)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(debit_cents: i64, credit_cents: i64) -> TransactionLine {
        TransactionLine {
            account_id: Uuid::new_v4(),
            debit_cents,
            credit_cents,
            description: None,
        }
    }

    #[test]
    fn totals_sum_each_side_independently() {
        let lines = [line(10_000, 0), line(2_500, 0), line(0, 12_500)];
        assert_eq!(line_totals(&lines), (12_500, 12_500));
    }

    #[test]
    fn totals_of_no_lines_are_zero() {
        assert_eq!(line_totals(&[]), (0, 0));
    }

    #[test]
    fn one_cent_difference_is_visible() {
        // 100.00 against 99.99 must never be treated as balanced.
        let (debits, credits) = line_totals(&[line(10_000, 0), line(0, 9_999)]);
        assert_ne!(debits, credits);
    }

    #[test]
    fn currency_defaults_to_usd() {
        let req: CreateTransactionRequest = serde_json::from_str(
            r#"{"transaction_date": "2025-01-15", "lines": []}"#,
        )
        .unwrap();
        assert_eq!(req.currency, "USD");
    }
}
