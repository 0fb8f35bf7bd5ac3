use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DashboardError;

pub const COLOR_CLOSE: &str = "blue";
pub const COLOR_OPEN: &str = "orange";
pub const COLOR_RETURN: &str = "purple";
pub const COLOR_VOLUME: &str = "orange";
pub const COLOR_WEEKDAY_BAR: &str = "skyblue";
pub const COLOR_UP: &str = "#4CAF50";
pub const COLOR_DOWN: &str = "#F44336";

/// The six charts offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "close-vs-open")]
    CloseVsOpen,
    #[serde(rename = "up-down-pie")]
    UpDownPie,
    #[serde(rename = "weekday-up-share-pie")]
    WeekdayUpSharePie,
    #[serde(rename = "weekday-up-days-bar")]
    WeekdayUpDaysBar,
    #[serde(rename = "daily-return")]
    DailyReturn,
    #[serde(rename = "daily-volume")]
    DailyVolume,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::CloseVsOpen,
        ChartKind::UpDownPie,
        ChartKind::WeekdayUpSharePie,
        ChartKind::WeekdayUpDaysBar,
        ChartKind::DailyReturn,
        ChartKind::DailyVolume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::CloseVsOpen => "close-vs-open",
            ChartKind::UpDownPie => "up-down-pie",
            ChartKind::WeekdayUpSharePie => "weekday-up-share-pie",
            ChartKind::WeekdayUpDaysBar => "weekday-up-days-bar",
            ChartKind::DailyReturn => "daily-return",
            ChartKind::DailyVolume => "daily-volume",
        }
    }

    /// Label shown in the chart selector
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::CloseVsOpen => "Fechamento x Abertura",
            ChartKind::UpDownPie => "Subiu x Caiu (Pizza)",
            ChartKind::WeekdayUpSharePie => "Proporção por Dia da Semana (Pizza)",
            ChartKind::WeekdayUpDaysBar => "Número de dias que subiu por Dia da Semana (Barra)",
            ChartKind::DailyReturn => "Retorno Diário (%)",
            ChartKind::DailyVolume => "Volume Diário",
        }
    }
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::CloseVsOpen
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the slug (`daily-volume`) or the selector label (`Volume Diário`)
impl FromStr for ChartKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s) || kind.label() == s)
            .ok_or_else(|| DashboardError::UnknownChartKind(s.to_string()))
    }
}

/// A named series of values aligned with the chart's x axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    /// Share of the total with one decimal; absent when the total is zero
    pub percent: Option<f64>,
    pub color: Option<String>,
}

/// Data handed to the chart-drawing side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartBody {
    Line {
        x: Vec<NaiveDate>,
        series: Vec<Series>,
    },
    Bar {
        categories: Vec<String>,
        series: Series,
    },
    Pie {
        total: u64,
        slices: Vec<PieSlice>,
    },
}

impl ChartBody {
    /// No points, no bars, or a pie whose total is zero
    pub fn is_empty(&self) -> bool {
        match self {
            ChartBody::Line { x, .. } => x.is_empty(),
            ChartBody::Bar { categories, .. } => categories.is_empty(),
            ChartBody::Pie { total, .. } => *total == 0,
        }
    }
}

/// Render instruction produced by one dashboard pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRender {
    pub kind: ChartKind,
    pub subtitle: String,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Rows in the filtered view behind this chart
    pub row_count: usize,
    pub empty: bool,
    pub body: ChartBody,
}

/// Percentage of `value` in `total` rounded to one decimal, `None` for a zero total
pub fn percent_of(value: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((value as f64 / total as f64 * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_parsing() {
        assert_eq!("daily-volume".parse::<ChartKind>().unwrap(), ChartKind::DailyVolume);
        assert_eq!("Close-Vs-Open".parse::<ChartKind>().unwrap(), ChartKind::CloseVsOpen);
        assert_eq!(
            "Subiu x Caiu (Pizza)".parse::<ChartKind>().unwrap(),
            ChartKind::UpDownPie
        );
        assert!(matches!(
            "candles".parse::<ChartKind>(),
            Err(DashboardError::UnknownChartKind(_))
        ));
        for kind in ChartKind::ALL {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_chart_kind_serde_matches_slug() {
        for kind in ChartKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1, 3), Some(33.3));
        assert_eq!(percent_of(2, 3), Some(66.7));
        assert_eq!(percent_of(0, 5), Some(0.0));
        assert_eq!(percent_of(0, 0), None);
    }

    #[test]
    fn test_body_serializes_with_type_tag() {
        let body = ChartBody::Pie { total: 0, slices: Vec::new() };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "pie");
        assert!(body.is_empty());
    }
}
