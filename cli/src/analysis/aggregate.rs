use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::FilteredView;

/// Up and down day counts of a view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpDownCount {
    pub up: u64,
    pub down: u64,
}

impl UpDownCount {
    pub fn total(&self) -> u64 {
        self.up + self.down
    }
}

/// Count rows with `is_up` true vs false. An empty view counts as `{0, 0}`.
pub fn count_up_down(view: &FilteredView<'_>) -> UpDownCount {
    view.iter().fold(UpDownCount::default(), |mut acc, record| {
        if record.is_up() {
            acc.up += 1;
        } else {
            acc.down += 1;
        }
        acc
    })
}

/// Number of up days per weekday, keyed by weekday name in ascending order.
///
/// Only weekdays present in the view appear; a weekday whose rows are all down maps to 0.
pub fn sum_up_by_weekday(view: &FilteredView<'_>) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in view.iter() {
        *counts.entry(record.weekday().to_string()).or_insert(0) += u64::from(record.is_up());
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StockRecord, StockTable};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn view_of(table: &StockTable) -> FilteredView<'_> {
        FilteredView::new(table.records().iter().collect())
    }

    #[test]
    fn test_count_up_down_single_up_day() {
        let table = StockTable::from_records(vec![StockRecord::new(
            ymd(2024, 1, 2),
            100.0,
            105.0,
            1.0,
            None,
            "Tuesday",
        )]);
        assert_eq!(count_up_down(&view_of(&table)), UpDownCount { up: 1, down: 0 });
    }

    #[test]
    fn test_empty_view_aggregations() {
        let view = FilteredView::default();
        let counts = count_up_down(&view);
        assert_eq!(counts, UpDownCount { up: 0, down: 0 });
        assert_eq!(counts.total(), 0);
        assert!(sum_up_by_weekday(&view).is_empty());
    }

    #[test]
    fn test_sum_up_by_weekday_mixed_days() {
        let table = StockTable::from_records(vec![
            StockRecord::new(ymd(2024, 1, 3), 10.0, 11.0, 1.0, None, "Wednesday"),
            StockRecord::new(ymd(2024, 1, 10), 11.0, 10.0, 1.0, None, "Wednesday"),
        ]);
        let sums = sum_up_by_weekday(&view_of(&table));
        assert_eq!(sums.len(), 1);
        assert_eq!(sums["Wednesday"], 1);
    }

    #[test]
    fn test_sum_up_by_weekday_keeps_all_down_weekdays_without_zero_filling() {
        let table = StockTable::from_records(vec![
            StockRecord::new(ymd(2024, 1, 1), 10.0, 9.0, 1.0, None, "Monday"),
            StockRecord::new(ymd(2024, 1, 5), 10.0, 12.0, 1.0, None, "Friday"),
            StockRecord::new(ymd(2024, 1, 12), 10.0, 12.0, 1.0, None, "Friday"),
        ]);
        let sums = sum_up_by_weekday(&view_of(&table));
        let keys: Vec<&str> = sums.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Friday", "Monday"]);
        assert_eq!(sums["Friday"], 2);
        assert_eq!(sums["Monday"], 0);
        assert!(!sums.contains_key("Tuesday"));
    }

    #[test]
    fn test_counts_cover_every_row() {
        let table = StockTable::from_records(
            (1..=20)
                .map(|d| {
                    let open = 100.0;
                    let close = if d % 3 == 0 { 99.0 } else if d % 3 == 1 { 101.0 } else { 100.0 };
                    StockRecord::new(ymd(2024, 3, d), open, close, 1.0, None, "Any")
                })
                .collect(),
        );
        let view = view_of(&table);
        let counts = count_up_down(&view);
        assert_eq!(counts.total() as usize, view.len());
        assert_eq!(counts.up, 7);
    }
}
