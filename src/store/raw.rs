//! Tolerant parsing of raw stored records into canonical entities.
//!
//! Stored documents accumulated several shapes over the app's lifetime:
//! amounts as numbers or numeric strings, dates as full timestamps or plain
//! days, budget records keyed two different ways. Normalization maps each
//! raw record to exactly one canonical entity and never fails on dirty
//! values; a field that cannot be understood decays to a neutral one.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::domain::budget::{fold_limits, BudgetLimit};
use crate::domain::category::Category;
use crate::domain::common::EntryKind;
use crate::domain::snapshot::Snapshot;
use crate::domain::transaction::Transaction;
use crate::errors::StoreError;

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// A category document as persisted, all fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
}

impl RawCategory {
    pub fn normalize(self) -> Category {
        Category {
            id: self.id.unwrap_or_else(mint_id),
            name: self.name.unwrap_or_default(),
            kind: parse_kind(self.kind.as_deref()),
            color: self.color.unwrap_or_default(),
        }
    }
}

/// A transaction document as persisted, all fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub id: Option<String>,
    pub kind: Option<String>,
    pub amount: Option<Value>,
    pub category_id: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl RawTransaction {
    pub fn normalize(self) -> Transaction {
        Transaction {
            id: self.id.unwrap_or_else(mint_id),
            kind: parse_kind(self.kind.as_deref()),
            amount: parse_amount(self.amount.as_ref()),
            category_id: self.category_id,
            date: parse_date(self.date.as_deref()),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// A budget-limit document as persisted.
///
/// Older documents carry the category id only as the document id, so the
/// canonical key falls back to `id` when `category_id` is absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBudgetLimit {
    pub id: Option<String>,
    pub category_id: Option<String>,
    pub limit_amount: Option<Value>,
}

impl RawBudgetLimit {
    pub fn normalize(self) -> Option<BudgetLimit> {
        let category_id = self.category_id.or(self.id)?;
        Some(BudgetLimit::new(
            category_id,
            parse_amount(self.limit_amount.as_ref()),
        ))
    }
}

/// A full stored document holding all three collections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    pub categories: Vec<RawCategory>,
    pub transactions: Vec<RawTransaction>,
    pub budget_limits: Vec<RawBudgetLimit>,
}

impl RawSnapshot {
    pub fn into_snapshot(self) -> Snapshot {
        let categories = self
            .categories
            .into_iter()
            .map(RawCategory::normalize)
            .collect();
        let transactions = self
            .transactions
            .into_iter()
            .map(RawTransaction::normalize)
            .collect();
        let budget_limits = fold_limits(
            self.budget_limits
                .into_iter()
                .filter_map(RawBudgetLimit::normalize),
        );
        Snapshot::new(categories, transactions, budget_limits)
    }
}

/// Parses a stored JSON document into a normalized snapshot.
pub fn snapshot_from_json(data: &str) -> Result<Snapshot, StoreError> {
    let raw: RawSnapshot = serde_json::from_str(data)?;
    Ok(raw.into_snapshot())
}

/// Interprets a stored amount: JSON number, numeric string, else zero.
pub fn parse_amount(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(amount) if amount.is_finite() => amount,
        _ => 0.0,
    }
}

/// Interprets a stored date: RFC 3339 timestamp or `YYYY-MM-DD`, else `None`.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let text = raw?.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    match NaiveDate::parse_from_str(text, DATE_ONLY_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            debug!(value = text, "unparsable stored date, excluding from month buckets");
            None
        }
    }
}

/// Interprets a stored kind string. Anything that is not recognizably income
/// is treated as an expense, matching the two-kind data model.
pub fn parse_kind(raw: Option<&str>) -> EntryKind {
    match raw {
        Some(text) if text.trim().eq_ignore_ascii_case("income") => EntryKind::Income,
        _ => EntryKind::Expense,
    }
}

fn mint_id() -> String {
    Uuid::new_v4().to_string()
}
