//! Domain model for dated monetary movements.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A single income or expense movement attributed to a calendar date.
///
/// `category_id` is a weak reference: the category may have been deleted
/// since the transaction was stored, and reporting resolves such danglers to
/// a fallback. `date` is `None` when the stored date could not be parsed;
/// the transaction still counts toward overall totals but is excluded from
/// every date-bucketed result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: EntryKind,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn new(
        kind: EntryKind,
        amount: f64,
        category_id: Option<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            category_id,
            date: Some(date),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Amount with non-numeric artifacts neutralized.
    ///
    /// A record whose stored amount decayed to NaN or an infinity sums as
    /// zero so one corrupt row cannot poison a whole report.
    pub fn normalized_amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }

    /// Amount signed by kind: income counts positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Income => self.normalized_amount(),
            EntryKind::Expense => -self.normalized_amount(),
        }
    }

    /// Whether the transaction falls in the same calendar month and year as
    /// `reference`. Component-wise comparison, not an elapsed-time window;
    /// undated transactions belong to no month.
    pub fn occurred_in_month(&self, reference: NaiveDate) -> bool {
        self.date.map_or(false, |date| {
            date.year() == reference.year() && date.month() == reference.month()
        })
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.kind)
    }
}
