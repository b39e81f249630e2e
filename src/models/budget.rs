//! Budget data model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A per-account budget for one fiscal period.
///
/// Maps to the `accounting_budgets` table. The module exposes budgets
/// read-only; actuals and variances are maintained by the host's
/// period-close process.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AccountingBudget {
    pub id: Uuid,

    pub budget_name: String,

    pub fiscal_year: i32,

    pub fiscal_period: i32,

    /// Account this budget applies to
    pub account_id: Uuid,

    /// Budgeted amount in cents
    pub budget_cents: i64,

    /// Actual amount posted so far, in cents
    pub actual_cents: i64,

    /// budget - actual, in cents
    pub variance_cents: i64,

    /// Variance as a percentage of the budgeted amount
    pub variance_percent: f64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
