use std::collections::HashMap;

use crate::domain::budget::BudgetLimits;
use crate::domain::report::BudgetProgress;

/// Budget consumption lookups over precomputed monthly spend.
pub struct BudgetService;

impl BudgetService {
    /// Progress of one category against its monthly ceiling.
    ///
    /// A category without a limit reads as `limit = 0`, one without spend
    /// this month as `spent = 0`; both paths produce a well-defined
    /// percentage (see [`BudgetProgress::from_parts`]). Never fails.
    pub fn progress(
        category_id: &str,
        budget_limits: &BudgetLimits,
        monthly_spend: &HashMap<String, f64>,
    ) -> BudgetProgress {
        let limit = budget_limits.get(category_id).copied().unwrap_or(0.0);
        let spent = monthly_spend.get(category_id).copied().unwrap_or(0.0);
        BudgetProgress::from_parts(limit, spent)
    }
}
