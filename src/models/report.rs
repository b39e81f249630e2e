//! Report-only projections: computed per request, never persisted.
//!
//! This module defines:
//! - Row types scanned from the report queries
//! - `BalanceSheet`, `IncomeStatement`, `Analytics` response bodies
//! - The pure assembly logic that groups rows into report buckets

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::account::AccountType;

/// One account's signed balance, as reported on the balance sheet.
#[derive(Debug, Clone, Serialize)]
pub struct AccountBalance {
    pub account_code: String,
    pub account_name: String,
    pub balance_cents: i64,
}

/// One account's period amount, as reported on the income statement.
#[derive(Debug, Clone, Serialize)]
pub struct AccountAmount {
    pub account_code: String,
    pub account_name: String,
    pub amount_cents: i64,
}

/// Row scanned from the balance-sheet query: one active account of
/// type asset/liability/equity with its signed balance (zero when the
/// account has no postings).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BalanceRow {
    pub account_type: AccountType,
    pub account_code: String,
    pub account_name: String,
    pub balance_cents: i64,
}

/// Row scanned from the income-statement query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AmountRow {
    pub account_type: AccountType,
    pub account_code: String,
    pub account_name: String,
    pub amount_cents: i64,
}

/// Query parameters for `GET /reports/balance-sheet`.
#[derive(Debug, Deserialize)]
pub struct BalanceSheetQuery {
    /// As-of date; defaults to the current date
    pub as_of_date: Option<NaiveDate>,
}

/// Query parameters for `GET /reports/income-statement`.
#[derive(Debug, Deserialize)]
pub struct IncomeStatementQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Point-in-time snapshot of asset/liability/equity balances.
#[derive(Debug, Serialize)]
pub struct BalanceSheet {
    pub as_of_date: NaiveDate,
    pub assets: Vec<AccountBalance>,
    pub liabilities: Vec<AccountBalance>,
    pub equity: Vec<AccountBalance>,
    pub total_assets_cents: i64,
    pub total_liabilities_cents: i64,
    pub total_equity_cents: i64,
}

impl BalanceSheet {
    /// Group query rows into the three buckets with running totals.
    ///
    /// Each bucket total is, by construction, the sum of that bucket's
    /// line balances. Rows of other account types are never produced
    /// by the query and are ignored here.
    pub fn from_rows(as_of_date: NaiveDate, rows: Vec<BalanceRow>) -> Self {
        let mut sheet = Self {
            as_of_date,
            assets: Vec::new(),
            liabilities: Vec::new(),
            equity: Vec::new(),
            total_assets_cents: 0,
            total_liabilities_cents: 0,
            total_equity_cents: 0,
        };

        for row in rows {
            let balance = AccountBalance {
                account_code: row.account_code,
                account_name: row.account_name,
                balance_cents: row.balance_cents,
            };
            match row.account_type {
                AccountType::Asset => {
                    sheet.total_assets_cents += balance.balance_cents;
                    sheet.assets.push(balance);
                }
                AccountType::Liability => {
                    sheet.total_liabilities_cents += balance.balance_cents;
                    sheet.liabilities.push(balance);
                }
                AccountType::Equity => {
                    sheet.total_equity_cents += balance.balance_cents;
                    sheet.equity.push(balance);
                }
                AccountType::Revenue | AccountType::Expense => {}
            }
        }

        sheet
    }
}

/// Period revenue/expense summary yielding net income.
#[derive(Debug, Serialize)]
pub struct IncomeStatement {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub revenues: Vec<AccountAmount>,
    pub expenses: Vec<AccountAmount>,
    pub total_revenue_cents: i64,
    pub total_expenses_cents: i64,
    pub net_income_cents: i64,
}

impl IncomeStatement {
    /// Group query rows into revenue and expense lists with totals and
    /// net income (total revenue - total expenses).
    pub fn from_rows(start_date: NaiveDate, end_date: NaiveDate, rows: Vec<AmountRow>) -> Self {
        let mut statement = Self {
            start_date,
            end_date,
            revenues: Vec::new(),
            expenses: Vec::new(),
            total_revenue_cents: 0,
            total_expenses_cents: 0,
            net_income_cents: 0,
        };

        for row in rows {
            let amount = AccountAmount {
                account_code: row.account_code,
                account_name: row.account_name,
                amount_cents: row.amount_cents,
            };
            match row.account_type {
                AccountType::Revenue => {
                    statement.total_revenue_cents += amount.amount_cents;
                    statement.revenues.push(amount);
                }
                AccountType::Expense => {
                    statement.total_expenses_cents += amount.amount_cents;
                    statement.expenses.push(amount);
                }
                _ => {}
            }
        }

        statement.net_income_cents = statement.total_revenue_cents - statement.total_expenses_cents;
        statement
    }
}

/// Aggregated dashboard analytics.
///
/// Balance totals are point-in-time (no date/status filter); revenue
/// and expense totals count posted transactions only. The two filter
/// regimes are intentionally different.
#[derive(Debug, Serialize)]
pub struct Analytics {
    pub total_assets_cents: i64,
    pub total_liabilities_cents: i64,
    pub total_equity_cents: i64,
    pub total_revenue_cents: i64,
    pub total_expenses_cents: i64,
    pub net_income_cents: i64,
    pub gross_profit_cents: i64,
    pub operating_profit_cents: i64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub debt_to_equity_ratio: f64,
    pub return_on_equity: f64,
}

impl Analytics {
    /// Derive the profit figures and financial ratios from the five
    /// aggregate totals.
    ///
    /// A zero denominator yields a zero ratio, never a division error.
    pub fn from_totals(
        total_assets_cents: i64,
        total_liabilities_cents: i64,
        total_equity_cents: i64,
        total_revenue_cents: i64,
        total_expenses_cents: i64,
    ) -> Self {
        let net_income_cents = total_revenue_cents - total_expenses_cents;

        Self {
            total_assets_cents,
            total_liabilities_cents,
            total_equity_cents,
            total_revenue_cents,
            total_expenses_cents,
            net_income_cents,
            gross_profit_cents: total_revenue_cents,
            operating_profit_cents: net_income_cents,
            current_ratio: ratio(total_assets_cents, total_liabilities_cents),
            quick_ratio: ratio(total_assets_cents, total_liabilities_cents),
            debt_to_equity_ratio: ratio(total_liabilities_cents, total_equity_cents),
            return_on_equity: ratio(net_income_cents, total_equity_cents),
        }
    }
}

/// Cents cancel out, so ratios are computed directly on cent totals.
fn ratio(numerator_cents: i64, denominator_cents: i64) -> f64 {
    if denominator_cents == 0 {
        0.0
    } else {
        numerator_cents as f64 / denominator_cents as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance_row(account_type: AccountType, code: &str, balance_cents: i64) -> BalanceRow {
        BalanceRow {
            account_type,
            account_code: code.to_string(),
            account_name: format!("Account {code}"),
            balance_cents,
        }
    }

    #[test]
    fn balance_sheet_totals_equal_bucket_sums() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let rows = vec![
            balance_row(AccountType::Asset, "1000", 150_000),
            balance_row(AccountType::Asset, "1100", 50_000),
            balance_row(AccountType::Liability, "2000", 80_000),
            balance_row(AccountType::Equity, "3000", 120_000),
        ];

        let sheet = BalanceSheet::from_rows(as_of, rows);

        assert_eq!(sheet.assets.len(), 2);
        assert_eq!(
            sheet.total_assets_cents,
            sheet.assets.iter().map(|a| a.balance_cents).sum::<i64>()
        );
        assert_eq!(sheet.total_liabilities_cents, 80_000);
        assert_eq!(sheet.total_equity_cents, 120_000);
    }

    #[test]
    fn balance_sheet_keeps_zero_balance_accounts() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let sheet = BalanceSheet::from_rows(as_of, vec![balance_row(AccountType::Asset, "1200", 0)]);
        assert_eq!(sheet.assets.len(), 1);
        assert_eq!(sheet.total_assets_cents, 0);
    }

    #[test]
    fn income_statement_nets_revenue_against_expenses() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let rows = vec![
            AmountRow {
                account_type: AccountType::Revenue,
                account_code: "4000".into(),
                account_name: "Sales".into(),
                amount_cents: 500_000,
            },
            AmountRow {
                account_type: AccountType::Expense,
                account_code: "5000".into(),
                account_name: "Rent".into(),
                amount_cents: 120_000,
            },
            AmountRow {
                account_type: AccountType::Expense,
                account_code: "5100".into(),
                account_name: "Payroll".into(),
                amount_cents: 200_000,
            },
        ];

        let statement = IncomeStatement::from_rows(start, end, rows);

        assert_eq!(statement.total_revenue_cents, 500_000);
        assert_eq!(statement.total_expenses_cents, 320_000);
        assert_eq!(statement.net_income_cents, 180_000);
    }

    #[test]
    fn analytics_derives_profits_and_ratios() {
        let analytics = Analytics::from_totals(400_000, 100_000, 200_000, 500_000, 300_000);

        assert_eq!(analytics.net_income_cents, 200_000);
        assert_eq!(analytics.gross_profit_cents, 500_000);
        assert_eq!(analytics.operating_profit_cents, 200_000);
        assert_eq!(analytics.current_ratio, 4.0);
        assert_eq!(analytics.quick_ratio, 4.0);
        assert_eq!(analytics.debt_to_equity_ratio, 0.5);
        assert_eq!(analytics.return_on_equity, 1.0);
    }

    #[test]
    fn zero_denominators_yield_zero_ratios() {
        // No liabilities and no equity: every ratio must be 0, not an error.
        let analytics = Analytics::from_totals(400_000, 0, 0, 100_000, 50_000);

        assert_eq!(analytics.current_ratio, 0.0);
        assert_eq!(analytics.quick_ratio, 0.0);
        assert_eq!(analytics.debt_to_equity_ratio, 0.0);
        assert_eq!(analytics.return_on_equity, 0.0);
    }
}
