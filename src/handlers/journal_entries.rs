//! Journal entry HTTP handlers.
//!
//! Same shape and same balance invariant as the transaction endpoints,
//! against the journal ledger tables.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::Response,
};
use serde_json::json;
use sqlx::{Postgres, QueryBuilder};

use crate::{
    db::DbPool,
    error::AppError,
    models::journal::{CreateJournalEntryRequest, JournalEntry, JournalListQuery, line_totals},
    response,
    services::posting_service,
};

/// List journal entries.
///
/// # Endpoint
///
/// `GET /journal-entries?status=draft&limit=50`
///
/// Ordered by `entry_date` descending; page size defaults to 50.
pub async fn list_journal_entries(
    State(pool): State<DbPool>,
    Query(filter): Query<JournalListQuery>,
) -> Result<Response, AppError> {
    let mut qb = QueryBuilder::<Postgres>::new(
        "SELECT id, entry_number, entry_date, description, reference, total_debit_cents, \
         total_credit_cents, status, approved_by, approved_at, created_at, updated_at \
         FROM accounting_journal_entries WHERE 1=1",
    );

    if let Some(ref status) = filter.status {
        qb.push(" AND status = ").push_bind(status);
    }
    qb.push(" ORDER BY entry_date DESC LIMIT ").push_bind(filter.limit);

    let entries: Vec<JournalEntry> = qb.build_query_as().fetch_all(&pool).await?;

    let count = entries.len();
    Ok(response::ok(json!({
        "entries": entries,
        "count": count,
    })))
}

/// Create a journal entry.
///
/// # Endpoint
///
/// `POST /journal-entries`
///
/// The header stores total debits and total credits separately (equal
/// by the balance invariant). Header and lines are inserted in one
/// database transaction.
pub async fn create_journal_entry(
    State(pool): State<DbPool>,
    body: Result<Json<CreateJournalEntryRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body?;

    if request.lines.is_empty() {
        return Err(AppError::Validation("at least one line is required".into()));
    }

    let (total_debits, total_credits) = line_totals(&request.lines);
    if total_debits != total_credits {
        return Err(AppError::UnbalancedLines);
    }

    let number = posting_service::journal_entry_number();
    let id = posting_service::create_journal_entry(
        &pool,
        &number,
        &request,
        total_debits,
        total_credits,
    )
    .await?;

    Ok(response::created(json!({
        "id": id,
        "entry_number": number,
        "message": "journal entry created",
    })))
}
