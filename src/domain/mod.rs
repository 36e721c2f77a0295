//! Domain entities for the finance tracker and the report types derived
//! from them.

pub mod budget;
pub mod category;
pub mod common;
pub mod month;
pub mod report;
pub mod snapshot;
pub mod transaction;

pub use budget::{fold_limits, BudgetLimit, BudgetLimits};
pub use category::Category;
pub use common::{Displayable, EntryKind, Identifiable, NamedEntity};
pub use month::MonthKey;
pub use report::{
    BudgetProgress, ChartSlice, NetSeries, Totals, DEFAULT_NET_SERIES_MONTHS,
    FALLBACK_CATEGORY_COLOR, FALLBACK_CATEGORY_LABEL, NO_DATA_LABEL,
};
pub use snapshot::Snapshot;
pub use transaction::Transaction;
