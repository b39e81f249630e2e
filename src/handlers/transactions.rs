//! Accounting transaction HTTP handlers.
//!
//! This module implements:
//! - GET /transactions - List transactions with date/status filters
//! - POST /transactions - Create a balanced transaction with its lines

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
    models::transaction::{
        AccountingTransaction, CreateTransactionRequest, TransactionListQuery, line_totals,
    },
    response,
    services::posting_service,
};

/// List accounting transactions.
///
/// # Endpoint
///
/// `GET /transactions?start_date=2025-01-01&end_date=2025-03-31&status=posted&limit=100`
///
/// The date range is inclusive on both ends. Results are ordered by
/// `transaction_date` descending, then `created_at` descending; the
/// page size defaults to 100.
pub async fn list_transactions(
    State(pool): State<DbPool>,
    Query(filter): Query<TransactionListQuery>,
) -> Result<Response, AppError> {
    let mut qb = QueryBuilder::<Postgres>::new(
        "SELECT id, transaction_number, transaction_date, reference_type, reference_id, \
         description, total_cents, currency, status, created_at, updated_at \
         FROM accounting_transactions WHERE 1=1",
    );

    if let Some(start_date) = filter.start_date {
        qb.push(" AND transaction_date >= ").push_bind(start_date);
    }
    if let Some(end_date) = filter.end_date {
        qb.push(" AND transaction_date <= ").push_bind(end_date);
    }
    if let Some(ref status) = filter.status {
        qb.push(" AND status = ").push_bind(status);
    }
    qb.push(" ORDER BY transaction_date DESC, created_at DESC LIMIT ")
        .push_bind(filter.limit);

    let transactions: Vec<AccountingTransaction> = qb.build_query_as().fetch_all(&pool).await?;

    let count = transactions.len();
    Ok(response::ok(json!({
        "transactions": transactions,
        "count": count,
    })))
}

/// Create an accounting transaction.
///
/// # Endpoint
///
/// `POST /transactions`
///
/// # Validation
///
/// - at least one line
/// - sum of debits equals sum of credits, exactly (integer cents)
///
/// # Atomicity
///
/// Header and lines are inserted in one database transaction; on any
/// failure nothing is written.
///
/// # Response (201 Created)
///
/// ```json
/// {"success": true, "data": {"id": "...", "transaction_number": "TXN-1736899200", "message": "..."}}
/// ```
pub async fn create_transaction(
    State(pool): State<DbPool>,
    body: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body?;

    if request.lines.is_empty() {
        return Err(AppError::Validation(
            "at least one transaction line is required".into(),
        ));
    }

    let (total_debits, total_credits) = line_totals(&request.lines);
    if total_debits != total_credits {
        return Err(AppError::UnbalancedLines);
    }

    let number = posting_service::transaction_number();
    let id = posting_service::create_transaction(&pool, &number, &request, total_debits).await?;

    Ok(response::created(json!({
        "id": id,
        "transaction_number": number,
        "message": "transaction created",
    })))
}
