use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Monthly spending ceilings keyed by category id.
///
/// The map shape enforces the "at most one limit per category" invariant by
/// construction.
pub type BudgetLimits = HashMap<String, f64>;

/// A stored spending guardrail for a specific category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLimit {
    pub category_id: String,
    pub limit_amount: f64,
}

impl BudgetLimit {
    pub fn new(category_id: impl Into<String>, limit_amount: f64) -> Self {
        Self {
            category_id: category_id.into(),
            limit_amount,
        }
    }
}

/// Folds stored limit records into the canonical map, last write wins.
pub fn fold_limits<I>(records: I) -> BudgetLimits
where
    I: IntoIterator<Item = BudgetLimit>,
{
    let mut limits = BudgetLimits::new();
    for record in records {
        limits.insert(record.category_id, record.limit_amount);
    }
    limits
}
