//! Builder pattern for assembling chart requests

use chrono::NaiveDate;

use crate::api::dashboard::ChartRequest;
use crate::models::ChartKind;

/// Fluent builder for a [`ChartRequest`]
///
/// # Example
/// ```rust
/// use stockdash::api::ChartRequestBuilder;
/// use stockdash::models::ChartKind;
///
/// let request = ChartRequestBuilder::new()
///     .with_chart(ChartKind::UpDownPie)
///     .with_year(2024)
///     .with_weekdays(["Monday", "Friday"])
///     .build();
/// assert_eq!(request.year, Some(2024));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChartRequestBuilder {
    request: ChartRequest,
}

impl ChartRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chart(mut self, chart: ChartKind) -> Self {
        self.request.chart = Some(chart);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.request.year = Some(year);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.request.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.request.end_date = Some(date);
        self
    }

    /// Set both ends of the inclusive date range
    pub fn with_date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with_start_date(start).with_end_date(end)
    }

    /// Replace the weekday selection
    pub fn with_weekdays<I, S>(mut self, weekdays: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.weekdays = Some(weekdays.into_iter().map(Into::into).collect());
        self
    }

    /// Add one weekday to the selection, starting from an empty one
    pub fn add_weekday(mut self, weekday: impl Into<String>) -> Self {
        self.request
            .weekdays
            .get_or_insert_with(Vec::new)
            .push(weekday.into());
        self
    }

    pub fn build(self) -> ChartRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_leaves_unset_fields_empty() {
        let request = ChartRequestBuilder::new().with_year(2021).build();
        assert_eq!(request.year, Some(2021));
        assert_eq!(request.chart, None);
        assert_eq!(request.weekdays, None);
    }

    #[test]
    fn test_add_weekday_accumulates() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let request = ChartRequestBuilder::new()
            .with_date_range(start, end)
            .add_weekday("Monday")
            .add_weekday("Friday")
            .build();
        assert_eq!(request.start_date, Some(start));
        assert_eq!(request.end_date, Some(end));
        assert_eq!(
            request.weekdays,
            Some(vec!["Monday".to_string(), "Friday".to_string()])
        );
    }
}
