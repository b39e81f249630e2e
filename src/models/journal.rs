//! Journal entry data models and API request types.
//!
//! Journal entries are a ledger parallel to accounting transactions:
//! same header-plus-lines shape, same balance invariant, but no
//! currency field, totals stored per side, and approval metadata that
//! this module stores without acting on.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a journal entry header from the database.
///
/// Maps to the `accounting_journal_entries` table. Unlike a
/// transaction header it stores `total_debit_cents` and
/// `total_credit_cents` separately (both populated, and equal at
/// creation time).
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct JournalEntry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// Generated document number, unique (`JE-<unix-epoch>`)
    pub entry_number: String,

    /// The date the entry applies to
    pub entry_date: NaiveDate,

    pub description: Option<String>,

    /// Free-form external reference
    pub reference: Option<String>,

    /// Sum of debits across lines, in cents
    pub total_debit_cents: i64,

    /// Sum of credits across lines, in cents
    pub total_credit_cents: i64,

    /// Entry status; new entries start as "draft"
    pub status: String,

    /// Approver, populated by the host's approval workflow
    pub approved_by: Option<Uuid>,

    /// Approval timestamp, populated by the host's approval workflow
    pub approved_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// One line of a journal entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JournalLine {
    /// Account being debited or credited
    pub account_id: Uuid,

    #[serde(default)]
    pub debit_cents: i64,

    #[serde(default)]
    pub credit_cents: i64,

    pub description: Option<String>,
}

/// Request body for creating a journal entry.
///
/// Same validation as transaction creation: `entry_date` required,
/// at least one line, debits equal credits exactly.
#[derive(Debug, Deserialize)]
pub struct CreateJournalEntryRequest {
    pub entry_date: NaiveDate,

    pub description: Option<String>,

    pub reference: Option<String>,

    #[serde(default)]
    pub lines: Vec<JournalLine>,
}

/// Query parameters for `GET /journal-entries`.
#[derive(Debug, Deserialize)]
pub struct JournalListQuery {
    /// Exact status filter
    pub status: Option<String>,

    /// Page size, defaults to 50
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Sum debits and credits across journal lines.
pub fn line_totals(lines: &[JournalLine]) -> (i64, i64) {
    lines.iter().fold((0, 0), |(debits, credits), line| {
        (debits + line.debit_cents, credits + line.credit_cents)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_cover_both_sides() {
        let lines = [
            JournalLine {
                account_id: Uuid::new_v4(),
                debit_cents: 5_000,
                credit_cents: 0,
                description: None,
            },
            JournalLine {
                account_id: Uuid::new_v4(),
                debit_cents: 0,
                credit_cents: 5_000,
                description: Some("offset".into()),
            },
        ];
        assert_eq!(line_totals(&lines), (5_000, 5_000));
    }

    #[test]
    fn missing_amounts_default_to_zero() {
        let line: JournalLine = serde_json::from_str(
            r#"{"account_id": "550e8400-e29b-41d4-a716-446655440000"}"#,
        )
        .unwrap();
        assert_eq!(line.debit_cents, 0);
        assert_eq!(line.credit_cents, 0);
    }
}
