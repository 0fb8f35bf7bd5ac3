use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::error::{DashboardError, Result};
use crate::models::stock_data::{RawStockRecord, StockRecord};
use crate::utils::{parse_flag, parse_table_date, Logger};

/// Normalized price table: dates coerced, rows sorted ascending, `year`/`is_up` derived.
///
/// Built once per process and only ever read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockTable {
    records: Vec<StockRecord>,
}

impl StockTable {
    /// Coerce, derive and sort raw rows.
    ///
    /// Fails with [`DashboardError::MalformedInput`] on the first date that cannot be parsed.
    /// Rows sharing a date keep their input order. `Year`/`Up` values supplied by the input are
    /// compared against the derived values and the derived values are kept.
    pub fn normalize(raw: &[RawStockRecord]) -> Result<Self> {
        let logger = Logger::new("NORMALIZE");
        let mut records = Vec::with_capacity(raw.len());
        let mut mismatched = 0usize;

        for (idx, row) in raw.iter().enumerate() {
            let date = parse_table_date(&row.date).ok_or_else(|| DashboardError::MalformedInput {
                row: idx + 1,
                reason: format!("'{}' is not a date", row.date),
            })?;

            let record = StockRecord::new(
                date,
                row.open,
                row.close,
                row.volume,
                row.daily_return_pct,
                row.weekday.trim(),
            );

            let year_differs = row
                .year
                .as_deref()
                .and_then(|y| y.trim().parse::<i32>().ok())
                .is_some_and(|y| y != record.year());
            let up_differs = row
                .up
                .as_deref()
                .and_then(parse_flag)
                .is_some_and(|up| up != record.is_up());
            if year_differs || up_differs {
                mismatched += 1;
            }

            records.push(record);
        }

        if mismatched > 0 {
            logger.warn(&format!(
                "{} rows carried Year/Up values inconsistent with data/Abertura/Fechamento; using derived values",
                mismatched
            ));
        }

        // Vec::sort_by_key is stable
        records.sort_by_key(StockRecord::date);

        logger.debug(&format!("Normalized {} rows", records.len()));
        Ok(Self { records })
    }

    /// Build a table from already-typed records, sorting them by date
    pub fn from_records(mut records: Vec<StockRecord>) -> Self {
        records.sort_by_key(StockRecord::date);
        Self { records }
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, ascending
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(StockRecord::year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct weekday names in order of first appearance
    pub fn weekdays(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.weekday()))
            .map(|r| r.weekday().to_string())
            .collect()
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.first().map(StockRecord::date)
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.last().map(StockRecord::date)
    }

    /// Raw rows equivalent to this table, derived columns included
    pub fn to_raw(&self) -> Vec<RawStockRecord> {
        self.records.iter().map(RawStockRecord::from).collect()
    }
}

/// Rows of a [`StockTable`] that passed the current filters, in table order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    rows: Vec<&'a StockRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn new(rows: Vec<&'a StockRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[&'a StockRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a StockRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.iter().map(StockRecord::date).collect()
    }
}
