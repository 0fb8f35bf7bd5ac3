//! Dashboard event handler: resolves the current control selections and renders one chart

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::analysis::{build_chart, filter, FilterParams};
use crate::error::{DashboardError, Result};
use crate::models::{ChartKind, ChartRender, FilteredView, StockTable};
use crate::utils::{Logger, Timer};

pub const DEFAULT_TICKER: &str = "GOOGL";

/// Selector options and their defaults, derived once from the loaded table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub years: Vec<i32>,
    pub default_year: i32,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub weekdays: Vec<String>,
    pub charts: Vec<ChartOption>,
    pub default_chart: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOption {
    pub kind: ChartKind,
    pub label: String,
}

/// Raw selections from the UI shell; `None` falls back to the control default.
///
/// `weekdays: Some(vec![])` is an explicit empty selection and yields an empty chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub chart: Option<ChartKind>,
    pub year: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub weekdays: Option<Vec<String>>,
}

impl Controls {
    /// Derive the selector domains. `None` for an empty table.
    pub fn from_table(table: &StockTable) -> Option<Self> {
        let years = table.years();
        Some(Self {
            default_year: *years.first()?,
            years,
            min_date: table.min_date()?,
            max_date: table.max_date()?,
            weekdays: table.weekdays(),
            charts: ChartKind::ALL
                .into_iter()
                .map(|kind| ChartOption {
                    kind,
                    label: kind.label().to_string(),
                })
                .collect(),
            default_chart: ChartKind::default(),
        })
    }

    /// Apply defaults and check weekday names against the data's domain
    pub fn resolve(&self, request: &ChartRequest) -> Result<(FilterParams, ChartKind)> {
        let weekdays = match &request.weekdays {
            None => self.weekdays.iter().cloned().collect(),
            Some(selected) => {
                let mut set = BTreeSet::new();
                for weekday in selected {
                    if !self.weekdays.contains(weekday) {
                        return Err(DashboardError::UnknownWeekday {
                            value: weekday.clone(),
                            known: self.weekdays.clone(),
                        });
                    }
                    set.insert(weekday.clone());
                }
                set
            }
        };

        let params = FilterParams {
            year: request.year.unwrap_or(self.default_year),
            start_date: request.start_date.unwrap_or(self.min_date),
            end_date: request.end_date.unwrap_or(self.max_date),
            weekdays,
        };
        Ok((params, request.chart.unwrap_or(self.default_chart)))
    }
}

/// Read-only dashboard over a loaded price table.
///
/// Every call to [`Dashboard::render`] is a pure function of the table and the request.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: StockTable,
    controls: Controls,
    ticker: String,
    logger: Logger,
}

impl Dashboard {
    /// Fails with [`DashboardError::NoRecords`] when the table is empty, since no control
    /// defaults can be derived from it.
    pub fn new(table: StockTable) -> Result<Self> {
        let controls = Controls::from_table(&table).ok_or(DashboardError::NoRecords)?;
        Ok(Self {
            table,
            controls,
            ticker: DEFAULT_TICKER.to_string(),
            logger: Logger::new("DASHBOARD"),
        })
    }

    /// Ticker shown in chart titles
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    pub fn table(&self) -> &StockTable {
        &self.table
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn filter(&self, params: &FilterParams) -> FilteredView<'_> {
        filter(&self.table, params)
    }

    /// Handle one interaction: resolve selections, filter, aggregate, build the chart
    pub fn render(&self, request: &ChartRequest) -> Result<ChartRender> {
        let timer = Timer::start("render");
        let (params, kind) = self.controls.resolve(request)?;
        let view = self.filter(&params);

        self.logger.debug_with_data(
            &format!("{} rows selected for {}", view.len(), kind),
            &params,
        );
        if view.is_empty() {
            self.logger.debug("Selection is empty, rendering empty chart");
        }

        let chart = build_chart(kind, &view, &self.ticker);
        timer.log_elapsed("DASHBOARD");
        Ok(chart)
    }
}
