//! Derived report values handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Label substituted when a chart slice references a deleted or absent
/// category. Fixed so consumers and tests can match on it exactly.
pub const FALLBACK_CATEGORY_LABEL: &str = "Other";

/// Color token paired with [`FALLBACK_CATEGORY_LABEL`].
pub const FALLBACK_CATEGORY_COLOR: &str = "#585858";

/// Placeholder label emitted when a trend series has no months to show.
/// Paired with a single zero value so chart renderers never receive empty
/// axes.
pub const NO_DATA_LABEL: &str = "No data";

/// Number of trailing months a net series keeps by default.
pub const DEFAULT_NET_SERIES_MONTHS: usize = 6;

/// Running balance figures over an entire transaction list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
}

impl Totals {
    pub fn from_parts(total_income: f64, total_expense: f64) -> Self {
        Self {
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
        }
    }
}

/// Consumption of one category's monthly budget.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetProgress {
    pub limit: f64,
    pub spent: f64,
    pub percentage: f64,
}

impl BudgetProgress {
    /// Derives the percentage from raw limit and spend figures.
    ///
    /// A non-positive limit yields `0.0` rather than NaN or an infinity.
    /// Over-budget spend is reported as-is (a value above 100); clamping for
    /// display is the presentation layer's decision.
    pub fn from_parts(limit: f64, spent: f64) -> Self {
        let percentage = if limit <= 0.0 {
            0.0
        } else {
            (spent / limit) * 100.0
        };
        Self {
            limit,
            spent,
            percentage,
        }
    }
}

/// One proportional-breakdown entry: label, summed value, display color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Parallel label/value sequences for a per-month trend chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl NetSeries {
    /// The documented "no data" sentinel: one placeholder label, one zero.
    pub fn no_data() -> Self {
        Self {
            labels: vec![NO_DATA_LABEL.to_string()],
            values: vec![0.0],
        }
    }
}
