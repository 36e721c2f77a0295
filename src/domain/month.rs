//! Calendar-month bucketing for trend reports.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month in a specific year.
///
/// Ordering is chronological. The storage key keeps the full four-digit year
/// so the same month of different years can never collide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Stable bucket key, e.g. `2025-03`.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Human-readable chart label, e.g. `03/25`.
    pub fn label(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
