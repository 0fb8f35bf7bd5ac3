use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{FilteredView, StockRecord, StockTable};

/// Resolved filter selections for one rendering pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weekdays: BTreeSet<String>,
}

impl FilterParams {
    pub fn new<I, S>(year: i32, start_date: NaiveDate, end_date: NaiveDate, weekdays: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            year,
            start_date,
            end_date,
            weekdays: weekdays.into_iter().map(Into::into).collect(),
        }
    }

    /// Row predicate: year matches, date within the inclusive range, weekday selected
    pub fn matches(&self, record: &StockRecord) -> bool {
        record.year() == self.year
            && self.start_date <= record.date()
            && record.date() <= self.end_date
            && self.weekdays.contains(record.weekday())
    }
}

/// Select the rows of `table` matching `params`, keeping table order.
///
/// Unknown years, an inverted date range or an empty weekday set produce an empty view.
pub fn filter<'a>(table: &'a StockTable, params: &FilterParams) -> FilteredView<'a> {
    FilteredView::new(
        table
            .records()
            .iter()
            .filter(|record| params.matches(record))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, open: f64, close: f64, weekday: &str) -> StockRecord {
        StockRecord::new(date, open, close, 1_000.0, None, weekday)
    }

    fn sample_table() -> StockTable {
        StockTable::from_records(vec![
            record(ymd(2023, 12, 29), 10.0, 11.0, "Friday"),
            record(ymd(2024, 1, 2), 100.0, 105.0, "Tuesday"),
            record(ymd(2024, 1, 3), 105.0, 101.0, "Wednesday"),
            record(ymd(2024, 1, 4), 101.0, 102.0, "Thursday"),
            record(ymd(2024, 1, 9), 102.0, 103.0, "Tuesday"),
            record(ymd(2024, 2, 6), 103.0, 99.0, "Tuesday"),
        ])
    }

    fn all_weekdays() -> Vec<&'static str> {
        vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
    }

    #[test]
    fn test_single_row_match() {
        let table = StockTable::from_records(vec![record(ymd(2024, 1, 2), 100.0, 105.0, "Tuesday")]);
        let params = FilterParams::new(2024, ymd(2024, 1, 1), ymd(2024, 1, 31), ["Tuesday"]);
        let view = filter(&table, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows()[0].date(), ymd(2024, 1, 2));
    }

    #[test]
    fn test_excluded_weekday_gives_empty_view() {
        let table = StockTable::from_records(vec![record(ymd(2024, 1, 2), 100.0, 105.0, "Tuesday")]);
        let params = FilterParams::new(2024, ymd(2024, 1, 1), ymd(2024, 1, 31), ["Monday"]);
        assert!(filter(&table, &params).is_empty());
    }

    #[test]
    fn test_inverted_range_gives_empty_view() {
        let table = sample_table();
        let params = FilterParams::new(2024, ymd(2024, 12, 31), ymd(2024, 1, 1), all_weekdays());
        assert!(filter(&table, &params).is_empty());
    }

    #[test]
    fn test_empty_weekdays_and_unknown_year() {
        let table = sample_table();
        let none: Vec<String> = Vec::new();
        let params = FilterParams::new(2024, ymd(2024, 1, 1), ymd(2024, 12, 31), none);
        assert!(filter(&table, &params).is_empty());

        let params = FilterParams::new(1990, ymd(1990, 1, 1), ymd(2030, 12, 31), all_weekdays());
        assert!(filter(&table, &params).is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let table = sample_table();
        let params = FilterParams::new(2024, ymd(2024, 1, 2), ymd(2024, 1, 9), all_weekdays());
        let dates = filter(&table, &params).dates();
        assert_eq!(
            dates,
            vec![ymd(2024, 1, 2), ymd(2024, 1, 3), ymd(2024, 1, 4), ymd(2024, 1, 9)]
        );
    }

    #[test]
    fn test_year_clause_applies_within_range() {
        let table = sample_table();
        // range spans the year boundary, year clause keeps only 2023
        let params = FilterParams::new(2023, ymd(2023, 1, 1), ymd(2024, 12, 31), all_weekdays());
        let dates = filter(&table, &params).dates();
        assert_eq!(dates, vec![ymd(2023, 12, 29)]);
    }

    #[test]
    fn test_filter_partitions_table() {
        let table = sample_table();
        let params = FilterParams::new(2024, ymd(2024, 1, 1), ymd(2024, 1, 31), ["Tuesday", "Thursday"]);
        let view = filter(&table, &params);

        assert!(view.iter().all(|r| params.matches(r)));
        let kept: Vec<NaiveDate> = view.dates();
        for record in table.records() {
            if !kept.contains(&record.date()) {
                assert!(!params.matches(record));
            }
        }
        assert_eq!(kept, vec![ymd(2024, 1, 2), ymd(2024, 1, 4), ymd(2024, 1, 9)]);
        assert!(kept.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_filter_does_not_mutate_table() {
        let table = sample_table();
        let before = table.clone();
        let a = FilterParams::new(2024, ymd(2024, 1, 1), ymd(2024, 12, 31), ["Tuesday"]);
        let b = FilterParams::new(2023, ymd(2023, 1, 1), ymd(2023, 12, 31), ["Friday"]);
        assert_eq!(filter(&table, &a).len(), 3);
        assert_eq!(filter(&table, &b).len(), 1);
        assert_eq!(filter(&table, &a).len(), 3);
        assert_eq!(table, before);
    }
}
