use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::format_date;

/// Header labels of the pre-processed price table
pub mod columns {
    pub const DATE: &str = "data";
    pub const OPEN: &str = "Abertura";
    pub const CLOSE: &str = "Fechamento";
    pub const VOLUME: &str = "Volume";
    pub const DAILY_RETURN_PCT: &str = "Retorno_Diário_Pct";
    pub const WEEKDAY: &str = "Dia_da_Semana";
    pub const YEAR: &str = "Year";
    pub const UP: &str = "Up";

    /// Columns every input file must carry
    pub const REQUIRED: [&str; 6] = [DATE, OPEN, CLOSE, VOLUME, DAILY_RETURN_PCT, WEEKDAY];
}

/// Raw CSV row, before date coercion and derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStockRecord {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "Abertura")]
    pub open: f64,
    #[serde(rename = "Fechamento")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
    #[serde(rename = "Retorno_Diário_Pct", default)]
    pub daily_return_pct: Option<f64>,
    #[serde(rename = "Dia_da_Semana")]
    pub weekday: String,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Up", default)]
    pub up: Option<String>,
}

/// One trading day.
///
/// `year` and `is_up` are derived in [`StockRecord::new`] and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRecord {
    date: NaiveDate,
    open: f64,
    close: f64,
    volume: f64,
    daily_return_pct: Option<f64>,
    weekday: String,
    year: i32,
    is_up: bool,
}

impl StockRecord {
    pub fn new(
        date: NaiveDate,
        open: f64,
        close: f64,
        volume: f64,
        daily_return_pct: Option<f64>,
        weekday: impl Into<String>,
    ) -> Self {
        Self {
            date,
            open,
            close,
            volume,
            daily_return_pct,
            weekday: weekday.into(),
            year: date.year(),
            is_up: close > open,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn close(&self) -> f64 {
        self.close
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn daily_return_pct(&self) -> Option<f64> {
        self.daily_return_pct
    }

    pub fn weekday(&self) -> &str {
        &self.weekday
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Closed above the open
    pub fn is_up(&self) -> bool {
        self.is_up
    }
}

impl From<&StockRecord> for RawStockRecord {
    fn from(record: &StockRecord) -> Self {
        Self {
            date: format_date(record.date),
            open: record.open,
            close: record.close,
            volume: record.volume,
            daily_return_pct: record.daily_return_pct,
            weekday: record.weekday.clone(),
            year: Some(record.year.to_string()),
            up: Some(if record.is_up { "True" } else { "False" }.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
        let up = StockRecord::new(date, 100.0, 105.0, 1_000.0, Some(1.2), "Friday");
        assert_eq!(up.year(), 2023);
        assert!(up.is_up());

        let flat = StockRecord::new(date, 100.0, 100.0, 1_000.0, None, "Friday");
        assert!(!flat.is_up(), "unchanged close is not an up day");

        let down = StockRecord::new(date, 100.0, 99.5, 1_000.0, None, "Friday");
        assert!(!down.is_up());
    }

    #[test]
    fn test_raw_conversion_carries_derived_columns() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let record = StockRecord::new(date, 100.0, 105.0, 10.0, None, "Tuesday");
        let raw = RawStockRecord::from(&record);
        assert_eq!(raw.date, "2024-01-02");
        assert_eq!(raw.year.as_deref(), Some("2024"));
        assert_eq!(raw.up.as_deref(), Some("True"));
    }
}
