//! Chart-of-accounts data models and API request types.
//!
//! This module defines:
//! - `AccountType`: the five fixed ledger account kinds
//! - `ChartOfAccount`: database entity for one account
//! - Request types for creating, patching, and filtering accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// The five fixed kinds of ledger account.
///
/// Stored as the PostgreSQL enum `account_type`. The kind decides the
/// sign convention in reports: asset and expense balances are
/// debit - credit, everything else is credit - debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "account_type", rename_all = "lowercase")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountType {
    /// Parse a client-supplied string, rejecting anything outside the
    /// five enumerated kinds with a 400-class error.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            other => Err(AppError::Validation(format!(
                "account_type must be one of: asset, liability, equity, revenue, expense (got '{other}')"
            ))),
        }
    }
}

/// Represents one account in the chart of accounts.
///
/// # Database Table
///
/// Maps to the `chart_of_accounts` table. Accounts form a hierarchy
/// through `parent_id` and are soft-deleted only: `is_active` flips to
/// false but the row survives so historical postings keep a valid
/// reference.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ChartOfAccount {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Human-assigned code, unique, used as the list sort key
    pub account_code: String,

    /// Display name
    pub account_name: String,

    /// One of the five fixed account kinds
    pub account_type: AccountType,

    /// Optional parent account forming the hierarchy
    pub parent_id: Option<Uuid>,

    /// Free-form description
    pub description: Option<String>,

    /// False once the account has been soft-deleted
    pub is_active: bool,

    /// System-protected accounts are seeded by the platform
    pub is_system_account: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_code": "1000",
///   "account_name": "Cash",
///   "account_type": "asset",
///   "description": "Petty cash"
/// }
/// ```
///
/// # Validation
///
/// - `account_code`, `account_name`: required, non-empty
/// - `account_type`: required, one of the five kinds
/// - `parent_id`, `description`: optional
/// - `is_system_account`: optional, defaults to false
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub account_code: String,

    pub account_name: String,

    /// Validated with [`AccountType::parse`] so an invalid value is a
    /// descriptive 400, not a deserialization failure.
    pub account_type: String,

    pub parent_id: Option<Uuid>,

    pub description: Option<String>,

    #[serde(default)]
    pub is_system_account: bool,
}

/// Patchable fields for `PUT /accounts/{id}`.
///
/// The struct itself is the allow-list: only these three columns can
/// ever be written by an update, whatever else the client sends.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountRequest {
    pub account_name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateAccountRequest {
    /// True when no recognized field was supplied; the handler rejects
    /// such requests before touching the database.
    pub fn is_empty(&self) -> bool {
        self.account_name.is_none() && self.description.is_none() && self.is_active.is_none()
    }
}

/// Query parameters for `GET /accounts`.
#[derive(Debug, Deserialize)]
pub struct AccountListQuery {
    /// Exact account-type filter (`?type=asset`)
    #[serde(rename = "type")]
    pub account_type: Option<String>,

    /// Active-flag filter (`?is_active=true`)
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_parses_all_five_kinds() {
        for (raw, kind) in [
            ("asset", AccountType::Asset),
            ("liability", AccountType::Liability),
            ("equity", AccountType::Equity),
            ("revenue", AccountType::Revenue),
            ("expense", AccountType::Expense),
        ] {
            assert_eq!(AccountType::parse(raw).unwrap(), kind);
        }
    }

    #[test]
    fn account_type_rejects_unknown_values() {
        let err = AccountType::parse("fixed-asset").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn account_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AccountType::Liability).unwrap(),
            "\"liability\""
        );
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(UpdateAccountRequest::default().is_empty());

        let patch: UpdateAccountRequest =
            serde_json::from_str(r#"{"account_name": "Cash on hand"}"#).unwrap();
        assert!(!patch.is_empty());
    }

    #[test]
    fn unrecognized_patch_fields_are_ignored() {
        // account_code is not patchable; serde drops it so it can never
        // reach the UPDATE statement.
        let patch: UpdateAccountRequest =
            serde_json::from_str(r#"{"account_code": "9999", "is_active": false}"#).unwrap();
        assert!(patch.account_name.is_none());
        assert_eq!(patch.is_active, Some(false));
    }
}
