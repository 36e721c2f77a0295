use serde::{Deserialize, Serialize};

use crate::domain::budget::BudgetLimits;
use crate::domain::category::Category;
use crate::domain::transaction::Transaction;

/// One consistent point-in-time view of the store's three collections.
///
/// The reporting layer never keeps a reference to "the" current data: the
/// caller owning the store snapshots it and passes the snapshot into each
/// report call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budget_limits: BudgetLimits,
}

impl Snapshot {
    pub fn new(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
        budget_limits: BudgetLimits,
    ) -> Self {
        Self {
            categories,
            transactions,
            budget_limits,
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.id == id)
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: &str) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.transactions.is_empty()
            && self.budget_limits.is_empty()
    }
}
