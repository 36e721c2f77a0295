//! Business logic helpers for managing transactions.

use crate::domain::snapshot::Snapshot;
use crate::domain::transaction::Transaction;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for stored transactions.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(snapshot: &mut Snapshot, transaction: Transaction) -> ServiceResult<String> {
        let id = transaction.id.clone();
        snapshot.transactions.push(transaction);
        Ok(id)
    }

    /// Updates the transaction identified by `id` via the provided mutator.
    pub fn update<F>(snapshot: &mut Snapshot, id: &str, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let txn = snapshot
            .transaction_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        mutator(txn);
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(snapshot: &mut Snapshot, id: &str) -> ServiceResult<Transaction> {
        let index = snapshot
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        Ok(snapshot.transactions.remove(index))
    }

    /// Transactions ordered most recent first, the way the feed presents
    /// them. Undated records sort last; ties keep stored order.
    pub fn list_recent(snapshot: &Snapshot) -> Vec<&Transaction> {
        let mut listed: Vec<&Transaction> = snapshot.transactions.iter().collect();
        listed.sort_by(|a, b| b.date.cmp(&a.date));
        listed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntryKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_transaction() -> Transaction {
        Transaction::new(EntryKind::Expense, 42.0, None, date(2025, 1, 1))
    }

    #[test]
    fn update_fails_for_missing_transaction() {
        let mut snapshot = Snapshot::default();
        let err = TransactionService::update(&mut snapshot, "missing", |_| {})
            .expect_err("update must fail for unknown id");
        assert!(
            matches!(err, ServiceError::Invalid(ref message) if message.contains("not found")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn remove_returns_deleted_transaction() {
        let mut snapshot = Snapshot::default();
        let txn = sample_transaction();
        let txn_id = txn.id.clone();
        TransactionService::add(&mut snapshot, txn).unwrap();

        let removed = TransactionService::remove(&mut snapshot, &txn_id).unwrap();
        assert_eq!(removed.id, txn_id);
        assert!(snapshot.transactions.is_empty());
    }

    #[test]
    fn list_recent_orders_newest_first_with_undated_last() {
        let mut snapshot = Snapshot::default();
        let old = Transaction::new(EntryKind::Expense, 1.0, None, date(2025, 1, 1));
        let new = Transaction::new(EntryKind::Expense, 2.0, None, date(2025, 3, 1));
        let mut undated = sample_transaction();
        undated.date = None;
        let undated_id = undated.id.clone();
        let new_id = new.id.clone();
        TransactionService::add(&mut snapshot, old).unwrap();
        TransactionService::add(&mut snapshot, undated).unwrap();
        TransactionService::add(&mut snapshot, new).unwrap();

        let listed = TransactionService::list_recent(&snapshot);
        assert_eq!(listed[0].id, new_id);
        assert_eq!(listed[2].id, undated_id);
    }
}
