use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::common::EntryKind;
use crate::domain::report::Totals;
use crate::domain::transaction::Transaction;

/// Pure balance and per-category spend computations.
///
/// Every function here is a deterministic transformation of its inputs:
/// no I/O, no mutation, no state between calls.
pub struct SummaryService;

impl SummaryService {
    /// Sums the whole transaction list into income, expense, and net totals.
    ///
    /// Date and category are ignored; only the kind routes each amount.
    /// An empty list yields all zeros.
    pub fn totals(transactions: &[Transaction]) -> Totals {
        let mut income = 0.0;
        let mut expense = 0.0;
        for txn in transactions {
            match txn.kind {
                EntryKind::Income => income += txn.normalized_amount(),
                EntryKind::Expense => expense += txn.normalized_amount(),
            }
        }
        Totals::from_parts(income, expense)
    }

    /// Expense totals for the reference month, grouped by category id.
    ///
    /// Only categories with at least one qualifying transaction appear; there
    /// are no zero entries. Undated transactions belong to no month and are
    /// skipped, as are uncategorized ones (they have no id to key by).
    pub fn monthly_spend_by_category(
        transactions: &[Transaction],
        reference: NaiveDate,
    ) -> HashMap<String, f64> {
        let mut spend = HashMap::new();
        for txn in transactions
            .iter()
            .filter(|txn| txn.kind == EntryKind::Expense && txn.occurred_in_month(reference))
        {
            if let Some(category_id) = &txn.category_id {
                *spend.entry(category_id.clone()).or_insert(0.0) += txn.normalized_amount();
            }
        }
        spend
    }
}
