//! Budget HTTP handlers.

use axum::{extract::State, response::Response};
use serde_json::json;

use crate::{db::DbPool, error::AppError, models::budget::AccountingBudget, response};

/// List budgets, newest fiscal year first.
///
/// # Endpoint
///
/// `GET /budgets`
pub async fn list_budgets(State(pool): State<DbPool>) -> Result<Response, AppError> {
    let budgets: Vec<AccountingBudget> = sqlx::query_as(
        "SELECT id, budget_name, fiscal_year, fiscal_period, account_id, budget_cents, \
         actual_cents, variance_cents, variance_percent, created_at, updated_at \
         FROM accounting_budgets ORDER BY fiscal_year DESC, fiscal_period",
    )
    .fetch_all(&pool)
    .await?;

    let count = budgets.len();
    Ok(response::ok(json!({
        "budgets": budgets,
        "count": count,
    })))
}
