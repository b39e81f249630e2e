//! Chart-of-accounts HTTP handlers.
//!
//! This module implements the account-related endpoints:
//! - GET /accounts - List accounts with optional filters
//! - POST /accounts - Create a new account
//! - PUT /accounts/{id} - Patch an existing account
//! - DELETE /accounts/{id} - Soft-delete an account

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::account::{
        AccountListQuery, AccountType, ChartOfAccount, CreateAccountRequest, UpdateAccountRequest,
    },
    response,
};

/// List chart of accounts.
///
/// # Endpoint
///
/// `GET /accounts?type=asset&is_active=true`
///
/// Both filters are optional; results are always ordered by
/// `account_code` ascending.
///
/// # Response (200 OK)
///
/// ```json
/// {"success": true, "data": {"accounts": [...], "count": 12}}
/// ```
pub async fn list_accounts(
    State(pool): State<DbPool>,
    Query(filter): Query<AccountListQuery>,
) -> Result<Response, AppError> {
    let mut qb = QueryBuilder::<Postgres>::new(
        "SELECT id, account_code, account_name, account_type, parent_id, description, \
         is_active, is_system_account, created_at, updated_at \
         FROM chart_of_accounts WHERE 1=1",
    );

    if let Some(ref raw) = filter.account_type {
        // An unknown type is a client error, not an empty result set.
        let kind = AccountType::parse(raw)?;
        qb.push(" AND account_type = ").push_bind(kind);
    }
    if let Some(is_active) = filter.is_active {
        qb.push(" AND is_active = ").push_bind(is_active);
    }
    qb.push(" ORDER BY account_code");

    let accounts: Vec<ChartOfAccount> = qb.build_query_as().fetch_all(&pool).await?;

    let count = accounts.len();
    Ok(response::ok(json!({
        "accounts": accounts,
        "count": count,
    })))
}

/// Create a new chart-of-accounts entry.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Validation
///
/// - `account_code` and `account_name` must be non-empty
/// - `account_type` must be one of the five enumerated kinds
///
/// # Response (201 Created)
///
/// Returns the generated id and timestamps.
pub async fn create_account(
    State(pool): State<DbPool>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body?;

    if request.account_code.trim().is_empty() {
        return Err(AppError::Validation("account_code is required".into()));
    }
    if request.account_name.trim().is_empty() {
        return Err(AppError::Validation("account_name is required".into()));
    }
    if request.account_type.trim().is_empty() {
        return Err(AppError::Validation("account_type is required".into()));
    }
    let account_type = AccountType::parse(&request.account_type)?;

    let (id, created_at, updated_at): (Uuid, DateTime<Utc>, DateTime<Utc>) = sqlx::query_as(
        r#"
        INSERT INTO chart_of_accounts
            (account_code, account_name, account_type, parent_id, description, is_system_account)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, created_at, updated_at
        "#,
    )
    .bind(&request.account_code)
    .bind(&request.account_name)
    .bind(account_type)
    .bind(request.parent_id)
    .bind(&request.description)
    .bind(request.is_system_account)
    .fetch_one(&pool)
    .await?;

    Ok(response::created(json!({
        "id": id,
        "created_at": created_at,
        "updated_at": updated_at,
        "message": "chart of account created",
    })))
}

/// Patch an existing account.
///
/// # Endpoint
///
/// `PUT /accounts/{id}`
///
/// Only `account_name`, `description` and `is_active` are patchable;
/// the typed patch struct is the allow-list, so nothing else can reach
/// the UPDATE statement. An unknown id is 404, an empty patch is 400
/// and performs no write.
pub async fn update_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
    body: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(patch) = body?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM chart_of_accounts WHERE id = $1)")
            .bind(account_id)
            .fetch_one(&pool)
            .await?;
    if !exists {
        return Err(AppError::NotFound("account"));
    }

    if patch.is_empty() {
        return Err(AppError::Validation("no fields to update".into()));
    }

    let mut qb = QueryBuilder::<Postgres>::new("UPDATE chart_of_accounts SET ");
    {
        let mut fields = qb.separated(", ");
        if let Some(account_name) = patch.account_name {
            fields.push("account_name = ");
            fields.push_bind_unseparated(account_name);
        }
        if let Some(description) = patch.description {
            fields.push("description = ");
            fields.push_bind_unseparated(description);
        }
        if let Some(is_active) = patch.is_active {
            fields.push("is_active = ");
            fields.push_bind_unseparated(is_active);
        }
    }
    qb.push(", updated_at = NOW() WHERE id = ");
    qb.push_bind(account_id);

    qb.build().execute(&pool).await?;

    Ok(response::ok(json!({ "message": "account updated" })))
}

/// Soft-delete an account.
///
/// # Endpoint
///
/// `DELETE /accounts/{id}`
///
/// Sets `is_active = false` and nothing else. The row is never
/// removed, so historical postings keep a valid account reference.
pub async fn delete_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let result =
        sqlx::query("UPDATE chart_of_accounts SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(account_id)
            .execute(&pool)
            .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("account"));
    }

    Ok(response::ok(json!({ "message": "account deactivated" })))
}
