//! In-memory store implementation with provider-style mutations.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::core::services::{CategoryService, ServiceError, ServiceResult, TransactionService};
use crate::domain::category::Category;
use crate::domain::common::EntryKind;
use crate::domain::snapshot::Snapshot;
use crate::domain::transaction::Transaction;
use crate::errors::StoreError;

use super::SnapshotSource;

/// Stock categories seeded on first run, so a fresh install has something to
/// attach transactions to.
static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::with_id("1", "Salary", EntryKind::Income, "#36A2EB"),
        Category::with_id("2", "Food", EntryKind::Expense, "#FF6384"),
        Category::with_id("3", "Transport", EntryKind::Expense, "#ff7856ff"),
        Category::with_id("4", "Dining", EntryKind::Expense, "#FF0056"),
    ]
});

/// Owns the canonical collections and applies last-write-wins mutations.
///
/// Reporting never reads this directly: callers take a [`Snapshot`] through
/// [`SnapshotSource`] and pass it to the reporting services.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: Snapshot,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the stock categories when otherwise empty.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.seed_defaults();
        store
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Seeds the stock categories if the store holds no data yet.
    pub fn seed_defaults(&mut self) {
        if self.snapshot.is_empty() {
            debug!("seeding default categories");
            self.snapshot.categories = DEFAULT_CATEGORIES.clone();
        }
    }

    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        kind: EntryKind,
        color: impl Into<String>,
    ) -> ServiceResult<String> {
        CategoryService::add(&mut self.snapshot, Category::new(name, kind, color))
    }

    pub fn edit_category(&mut self, id: &str, changes: Category) -> ServiceResult<()> {
        CategoryService::edit(&mut self.snapshot, id, changes)
    }

    /// Deletes a category and cascades to its transactions and budget limit.
    pub fn delete_category(&mut self, id: &str) -> ServiceResult<()> {
        if self.snapshot.category(id).is_none() {
            return Err(StoreError::InvalidRef(format!("unknown category `{id}`")).into());
        }
        let remaining = CategoryService::cascade_delete(&self.snapshot, id);
        let dropped = self.snapshot.transactions.len() - remaining.transactions.len();
        if dropped > 0 {
            warn!(category = id, count = dropped, "cascade removed transactions");
        }
        self.snapshot = remaining;
        Ok(())
    }

    pub fn add_transaction(
        &mut self,
        kind: EntryKind,
        amount: f64,
        category_id: Option<String>,
        date: NaiveDate,
    ) -> ServiceResult<String> {
        let mut transaction = Transaction::new(kind, amount, category_id, date);
        transaction.amount = transaction.normalized_amount();
        TransactionService::add(&mut self.snapshot, transaction)
    }

    pub fn update_transaction<F>(&mut self, id: &str, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        TransactionService::update(&mut self.snapshot, id, mutator)?;
        if let Some(txn) = self.snapshot.transaction_mut(id) {
            txn.amount = txn.normalized_amount();
        }
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: &str) -> ServiceResult<Transaction> {
        TransactionService::remove(&mut self.snapshot, id)
    }

    /// Sets or replaces the monthly ceiling for a category.
    pub fn set_budget_limit(&mut self, category_id: &str, amount: f64) -> ServiceResult<()> {
        if self.snapshot.category(category_id).is_none() {
            return Err(
                StoreError::InvalidRef(format!("unknown category `{category_id}`")).into(),
            );
        }
        let normalized = if amount.is_finite() { amount } else { 0.0 };
        self.snapshot
            .budget_limits
            .insert(category_id.to_string(), normalized);
        Ok(())
    }

    pub fn clear_budget_limit(&mut self, category_id: &str) -> ServiceResult<()> {
        if self.snapshot.budget_limits.remove(category_id).is_none() {
            return Err(ServiceError::Invalid(format!(
                "No budget limit for category `{category_id}`"
            )));
        }
        Ok(())
    }
}

impl SnapshotSource for InMemoryStore {
    fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }
}
