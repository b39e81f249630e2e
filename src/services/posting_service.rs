//! Posting service - atomic creation of transactions and journal entries.
//!
//! Both ledgers share the same header-plus-lines shape, and both
//! inserts follow the same pattern: begin a database transaction,
//! insert the header, insert every line, commit. If anything fails the
//! transaction is dropped uncommitted and PostgreSQL rolls it back, so
//! a header can never exist with a partial set of lines.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{journal::CreateJournalEntryRequest, transaction::CreateTransactionRequest},
};

/// Generate a transaction document number: a fixed prefix plus the
/// creation epoch timestamp.
pub fn transaction_number() -> String {
    format!("TXN-{}", Utc::now().timestamp())
}

/// Generate a journal entry document number.
pub fn journal_entry_number() -> String {
    format!("JE-{}", Utc::now().timestamp())
}

/// Insert a transaction header and its lines atomically.
///
/// The caller has already validated the request: at least one line,
/// total debits equal to total credits (`total_cents`).
///
/// # Returns
///
/// The generated header id.
pub async fn create_transaction(
    pool: &DbPool,
    number: &str,
    request: &CreateTransactionRequest,
    total_cents: i64,
) -> Result<Uuid, AppError> {
    let mut tx = pool.begin().await?;

    let transaction_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO accounting_transactions
            (transaction_number, transaction_date, description, total_cents, currency)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(number)
    .bind(request.transaction_date)
    .bind(&request.description)
    .bind(total_cents)
    .bind(&request.currency)
    .fetch_one(&mut *tx)
    .await?;

    for line in &request.lines {
        sqlx::query(
            r#"
            INSERT INTO accounting_transaction_lines
                (transaction_id, account_id, debit_cents, credit_cents, description)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(transaction_id)
        .bind(line.account_id)
        .bind(line.debit_cents)
        .bind(line.credit_cents)
        .bind(&line.description)
        .execute(&mut *tx)
        .await?;
    }

    // Commit header and lines together; any earlier `?` dropped the
    // transaction uncommitted and nothing was written.
    tx.commit().await?;

    Ok(transaction_id)
}

/// Insert a journal entry header and its lines atomically.
///
/// Journal headers store the two totals separately; the caller has
/// already verified they are equal.
pub async fn create_journal_entry(
    pool: &DbPool,
    number: &str,
    request: &CreateJournalEntryRequest,
    total_debit_cents: i64,
    total_credit_cents: i64,
) -> Result<Uuid, AppError> {
    let mut tx = pool.begin().await?;

    let entry_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO accounting_journal_entries
            (entry_number, entry_date, description, reference, total_debit_cents, total_credit_cents)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(number)
    .bind(request.entry_date)
    .bind(&request.description)
    .bind(&request.reference)
    .bind(total_debit_cents)
    .bind(total_credit_cents)
    .fetch_one(&mut *tx)
    .await?;

    for line in &request.lines {
        sqlx::query(
            r#"
            INSERT INTO accounting_journal_entry_lines
                (journal_entry_id, account_id, debit_cents, credit_cents, description)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry_id)
        .bind(line.account_id)
        .bind(line.debit_cents)
        .bind(line.credit_cents)
        .bind(&line.description)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(entry_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_numbers_carry_ledger_prefixes() {
        let txn = transaction_number();
        let je = journal_entry_number();

        assert!(txn.starts_with("TXN-"));
        assert!(je.starts_with("JE-"));
        // The suffix is an epoch timestamp.
        assert!(txn["TXN-".len()..].parse::<i64>().is_ok());
        assert!(je["JE-".len()..].parse::<i64>().is_ok());
    }
}
