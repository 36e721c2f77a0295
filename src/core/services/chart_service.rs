use chrono::NaiveDate;

use crate::domain::category::Category;
use crate::domain::common::EntryKind;
use crate::domain::month::MonthKey;
use crate::domain::report::{
    ChartSlice, NetSeries, FALLBACK_CATEGORY_COLOR, FALLBACK_CATEGORY_LABEL,
};
use crate::domain::transaction::Transaction;

/// Builds chart-ready datasets from snapshot collections.
pub struct ChartService;

impl ChartService {
    /// Per-category slices for the reference month and the given kind.
    ///
    /// Slices appear in first-encounter order among the filtered
    /// transactions, not sorted by value. A slice whose category id no longer
    /// resolves (deleted category, or an uncategorized transaction) carries
    /// the fixed fallback label and color; distinct dangling ids still
    /// produce distinct slices.
    pub fn series(
        transactions: &[Transaction],
        categories: &[Category],
        reference: NaiveDate,
        kind: EntryKind,
    ) -> Vec<ChartSlice> {
        // Vec scan instead of a map keeps first-encounter order as the data
        // structure itself.
        let mut groups: Vec<(Option<&str>, f64)> = Vec::new();
        for txn in transactions
            .iter()
            .filter(|txn| txn.kind == kind && txn.occurred_in_month(reference))
        {
            let key = txn.category_id.as_deref();
            match groups.iter().position(|(group, _)| *group == key) {
                Some(index) => groups[index].1 += txn.normalized_amount(),
                None => groups.push((key, txn.normalized_amount())),
            }
        }

        groups
            .into_iter()
            .map(|(category_id, value)| {
                let category =
                    category_id.and_then(|id| categories.iter().find(|cat| cat.id == id));
                match category {
                    Some(category) => ChartSlice {
                        label: category.name.clone(),
                        value,
                        color: category.color.clone(),
                    },
                    None => ChartSlice {
                        label: FALLBACK_CATEGORY_LABEL.to_string(),
                        value,
                        color: FALLBACK_CATEGORY_COLOR.to_string(),
                    },
                }
            })
            .collect()
    }

    /// Net signed total per month over the trailing `month_window` months.
    ///
    /// Transactions are stable-sorted by date, bucketed by calendar month
    /// (income adds, expense subtracts; net per month, not cumulative), and
    /// the series keeps the last `month_window` buckets. Undated
    /// transactions are excluded. With no qualifying months the documented
    /// sentinel is returned: one placeholder label with a single zero value.
    pub fn monthly_net_series(transactions: &[Transaction], month_window: usize) -> NetSeries {
        let mut dated: Vec<(NaiveDate, f64)> = transactions
            .iter()
            .filter_map(|txn| txn.date.map(|date| (date, txn.signed_amount())))
            .collect();
        dated.sort_by_key(|(date, _)| *date);

        // Sorted input means each month's entries are contiguous.
        let mut months: Vec<(MonthKey, f64)> = Vec::new();
        for (date, amount) in dated {
            let key = MonthKey::from_date(date);
            if let Some((last, total)) = months.last_mut() {
                if *last == key {
                    *total += amount;
                    continue;
                }
            }
            months.push((key, amount));
        }

        if months.is_empty() {
            return NetSeries::no_data();
        }

        let skip = months.len().saturating_sub(month_window);
        let window = &months[skip..];
        NetSeries {
            labels: window.iter().map(|(key, _)| key.label()).collect(),
            values: window.iter().map(|(_, value)| *value).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::DEFAULT_NET_SERIES_MONTHS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: f64, category: Option<&str>, on: NaiveDate) -> Transaction {
        Transaction::new(
            EntryKind::Expense,
            amount,
            category.map(String::from),
            on,
        )
    }

    #[test]
    fn series_preserves_first_encounter_order() {
        let food = Category::with_id("c1", "Food", EntryKind::Expense, "#FF6384");
        let transport = Category::with_id("c2", "Transport", EntryKind::Expense, "#36A2EB");
        let categories = vec![food, transport];
        let transactions = vec![
            expense(5.0, Some("c2"), date(2025, 4, 2)),
            expense(20.0, Some("c1"), date(2025, 4, 3)),
            expense(7.0, Some("c2"), date(2025, 4, 9)),
        ];
        let slices = ChartService::series(
            &transactions,
            &categories,
            date(2025, 4, 1),
            EntryKind::Expense,
        );
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Transport");
        assert_eq!(slices[0].value, 12.0);
        assert_eq!(slices[1].label, "Food");
        assert_eq!(slices[1].value, 20.0);
    }

    #[test]
    fn dangling_category_gets_fallback_label_and_color() {
        let transactions = vec![expense(15.0, Some("deleted"), date(2025, 4, 2))];
        let slices =
            ChartService::series(&transactions, &[], date(2025, 4, 1), EntryKind::Expense);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, FALLBACK_CATEGORY_LABEL);
        assert_eq!(slices[0].color, FALLBACK_CATEGORY_COLOR);
        assert_eq!(slices[0].value, 15.0);
    }

    #[test]
    fn net_series_signs_income_positive_expense_negative() {
        let transactions = vec![
            Transaction::new(EntryKind::Income, 200.0, None, date(2025, 4, 5)),
            expense(50.0, None, date(2025, 4, 20)),
        ];
        let series = ChartService::monthly_net_series(&transactions, DEFAULT_NET_SERIES_MONTHS);
        assert_eq!(series.labels, vec!["04/25".to_string()]);
        assert_eq!(series.values, vec![150.0]);
    }

    #[test]
    fn net_series_without_data_returns_sentinel() {
        let series = ChartService::monthly_net_series(&[], DEFAULT_NET_SERIES_MONTHS);
        assert_eq!(series, NetSeries::no_data());
    }
}
