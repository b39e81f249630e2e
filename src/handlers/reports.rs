//! Financial report HTTP handlers.
//!
//! This module implements:
//! - GET /reports/balance-sheet - point-in-time asset/liability/equity snapshot
//! - GET /reports/income-statement - period revenue/expense summary
//! - GET /reports/analytics - dashboard totals and financial ratios
//!
//! Reports only count transactions with status "posted"; the analytics
//! balance totals are the documented exception (point-in-time,
//! unfiltered).

use axum::{
    extract::{Query, State},
    response::Response,
};
use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        account::AccountType,
        report::{
            AmountRow, Analytics, BalanceRow, BalanceSheet, BalanceSheetQuery, IncomeStatement,
            IncomeStatementQuery,
        },
    },
    response,
};

/// Generate a balance sheet as of a given date.
///
/// # Endpoint
///
/// `GET /reports/balance-sheet?as_of_date=2025-06-30`
///
/// `as_of_date` defaults to the current date. Every active
/// asset/liability/equity account is reported; accounts with no
/// postings appear with a zero balance through the outer join. The
/// sign convention: asset balance = debit - credit, liability and
/// equity balance = credit - debit. Only posted transactions dated on
/// or before the as-of date are counted.
pub async fn balance_sheet(
    State(pool): State<DbPool>,
    Query(query): Query<BalanceSheetQuery>,
) -> Result<Response, AppError> {
    let as_of_date = query.as_of_date.unwrap_or_else(|| Utc::now().date_naive());

    let rows: Vec<BalanceRow> = sqlx::query_as(
        r#"
        SELECT
            coa.account_type,
            coa.account_code,
            coa.account_name,
            COALESCE(SUM(
                CASE
                    WHEN coa.account_type IN ('asset', 'expense')
                        THEN line.debit_cents - line.credit_cents
                    ELSE line.credit_cents - line.debit_cents
                END
            ), 0)::BIGINT AS balance_cents
        FROM chart_of_accounts coa
        LEFT JOIN accounting_transaction_lines line ON line.account_id = coa.id
        LEFT JOIN accounting_transactions txn ON txn.id = line.transaction_id
        WHERE coa.is_active = TRUE
          AND coa.account_type IN ('asset', 'liability', 'equity')
          AND (txn.transaction_date IS NULL OR txn.transaction_date <= $1)
          AND (txn.status IS NULL OR txn.status = 'posted')
        GROUP BY coa.account_type, coa.account_code, coa.account_name
        ORDER BY coa.account_type, coa.account_code
        "#,
    )
    .bind(as_of_date)
    .fetch_all(&pool)
    .await?;

    Ok(response::ok(BalanceSheet::from_rows(as_of_date, rows)))
}

/// Generate an income statement for an explicit period.
///
/// # Endpoint
///
/// `GET /reports/income-statement?start_date=2025-01-01&end_date=2025-03-31`
///
/// Both dates are required; the range is inclusive. Revenue amounts
/// are credit - debit, expense amounts debit - credit, and net income
/// is total revenue - total expenses.
pub async fn income_statement(
    State(pool): State<DbPool>,
    Query(query): Query<IncomeStatementQuery>,
) -> Result<Response, AppError> {
    let (Some(start_date), Some(end_date)) = (query.start_date, query.end_date) else {
        return Err(AppError::Validation(
            "start_date and end_date are required".into(),
        ));
    };

    let rows: Vec<AmountRow> = sqlx::query_as(
        r#"
        SELECT
            coa.account_type,
            coa.account_code,
            coa.account_name,
            COALESCE(SUM(
                CASE
                    WHEN coa.account_type = 'revenue'
                        THEN line.credit_cents - line.debit_cents
                    WHEN coa.account_type = 'expense'
                        THEN line.debit_cents - line.credit_cents
                    ELSE 0
                END
            ), 0)::BIGINT AS amount_cents
        FROM chart_of_accounts coa
        LEFT JOIN accounting_transaction_lines line ON line.account_id = coa.id
        LEFT JOIN accounting_transactions txn ON txn.id = line.transaction_id
        WHERE coa.is_active = TRUE
          AND coa.account_type IN ('revenue', 'expense')
          AND txn.transaction_date BETWEEN $1 AND $2
          AND txn.status = 'posted'
        GROUP BY coa.account_type, coa.account_code, coa.account_name
        ORDER BY coa.account_type, coa.account_code
        "#,
    )
    .bind(start_date)
    .bind(end_date)
    .fetch_all(&pool)
    .await?;

    Ok(response::ok(IncomeStatement::from_rows(
        start_date, end_date, rows,
    )))
}

/// Aggregated analytics for the accounting dashboard.
///
/// # Endpoint
///
/// `GET /reports/analytics`
///
/// Asset/liability/equity totals are point-in-time and unfiltered;
/// revenue/expense totals count posted transactions only. Ratios with
/// a zero denominator come back as 0.
pub async fn analytics(State(pool): State<DbPool>) -> Result<Response, AppError> {
    let total_assets = point_in_time_total(&pool, AccountType::Asset).await?;
    let total_liabilities = point_in_time_total(&pool, AccountType::Liability).await?;
    let total_equity = point_in_time_total(&pool, AccountType::Equity).await?;
    let total_revenue = posted_period_total(&pool, AccountType::Revenue).await?;
    let total_expenses = posted_period_total(&pool, AccountType::Expense).await?;

    Ok(response::ok(Analytics::from_totals(
        total_assets,
        total_liabilities,
        total_equity,
        total_revenue,
        total_expenses,
    )))
}

/// Signed balance total across all active accounts of one kind,
/// with no date or status filter.
async fn point_in_time_total(pool: &DbPool, kind: AccountType) -> Result<i64, AppError> {
    // Asset balances are debit - credit; liability/equity the reverse.
    let sql = match kind {
        AccountType::Asset => {
            r#"
            SELECT COALESCE(SUM(line.debit_cents - line.credit_cents), 0)::BIGINT
            FROM chart_of_accounts coa
            LEFT JOIN accounting_transaction_lines line ON line.account_id = coa.id
            WHERE coa.is_active = TRUE AND coa.account_type = $1
            "#
        }
        _ => {
            r#"
            SELECT COALESCE(SUM(line.credit_cents - line.debit_cents), 0)::BIGINT
            FROM chart_of_accounts coa
            LEFT JOIN accounting_transaction_lines line ON line.account_id = coa.id
            WHERE coa.is_active = TRUE AND coa.account_type = $1
            "#
        }
    };

    let total: i64 = sqlx::query_scalar(sql).bind(kind).fetch_one(pool).await?;
    Ok(total)
}

/// Period total across all active accounts of one kind, counting
/// posted transactions only.
async fn posted_period_total(pool: &DbPool, kind: AccountType) -> Result<i64, AppError> {
    // Revenue is credit - debit; expense is debit - credit.
    let sql = match kind {
        AccountType::Expense => {
            r#"
            SELECT COALESCE(SUM(line.debit_cents - line.credit_cents), 0)::BIGINT
            FROM chart_of_accounts coa
            JOIN accounting_transaction_lines line ON line.account_id = coa.id
            JOIN accounting_transactions txn ON txn.id = line.transaction_id
            WHERE coa.is_active = TRUE AND coa.account_type = $1 AND txn.status = 'posted'
            "#
        }
        _ => {
            r#"
            SELECT COALESCE(SUM(line.credit_cents - line.debit_cents), 0)::BIGINT
            FROM chart_of_accounts coa
            JOIN accounting_transaction_lines line ON line.account_id = coa.id
            JOIN accounting_transactions txn ON txn.id = line.transaction_id
            WHERE coa.is_active = TRUE AND coa.account_type = $1 AND txn.status = 'posted'
            "#
        }
    };

    let total: i64 = sqlx::query_scalar(sql).bind(kind).fetch_one(pool).await?;
    Ok(total)
}
