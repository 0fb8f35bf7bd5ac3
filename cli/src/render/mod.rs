//! Plain-text rendering of chart instructions for terminal output

pub mod format;

use crate::models::{ChartBody, ChartKind, ChartRender, Series};
use crate::utils::format_date;
use format::{bar, format_percentage_with_sign, format_price, format_volume};

const BAR_WIDTH: usize = 40;
const EMPTY_MESSAGE: &str = "Nenhum dado para a seleção atual";

/// Render a chart as text: heading, then a table, bar list or pie breakdown
pub fn render_text(chart: &ChartRender) -> String {
    let mut out = vec![format!("# {}", chart.subtitle), chart.title.clone()];
    if let (Some(x), Some(y)) = (&chart.x_label, &chart.y_label) {
        out.push(format!("({} x {})", x, y));
    }
    out.push(String::new());

    if chart.empty {
        out.push(format!("{} ({} linhas)", EMPTY_MESSAGE, chart.row_count));
        return out.join("\n");
    }

    match &chart.body {
        ChartBody::Line { x, series } => {
            let mut header = format!("{:<10}", "Data");
            for s in series {
                header.push_str(&format!(" | {:>12}", s.name));
            }
            out.push(header);
            for (idx, date) in x.iter().enumerate() {
                let mut line = format_date(*date);
                for s in series {
                    let value = s.values.get(idx).copied().flatten();
                    let cell = match (chart.kind, value) {
                        (ChartKind::DailyReturn, Some(v)) => format_percentage_with_sign(v),
                        _ => format_price(value),
                    };
                    line.push_str(&format!(" | {:>12}", cell));
                }
                out.push(line);
            }
        }
        ChartBody::Bar { categories, series } => {
            out.extend(bar_lines(chart.kind, categories, series));
        }
        ChartBody::Pie { total, slices } => {
            let width = slices.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
            for slice in slices {
                let percent = slice.percent.unwrap_or(0.0);
                out.push(format!(
                    "{:<width$} {:>6} {:>5.1}% {}",
                    slice.label,
                    slice.value,
                    percent,
                    bar(percent, 100.0, BAR_WIDTH),
                    width = width
                ));
            }
            out.push(format!("{:<width$} {:>6}", "Total", total, width = width));
        }
    }

    out.join("\n")
}

fn bar_lines(kind: ChartKind, categories: &[String], series: &Series) -> Vec<String> {
    let values: Vec<f64> = series.values.iter().map(|v| v.unwrap_or(0.0)).collect();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let width = categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);

    categories
        .iter()
        .zip(values)
        .map(|(category, value)| {
            let shown = match kind {
                ChartKind::DailyVolume => format_volume(value),
                _ => format!("{:.0}", value),
            };
            format!(
                "{:<width$} {:>8} {}",
                category,
                shown,
                bar(value, max, BAR_WIDTH),
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build_chart;
    use crate::models::{FilteredView, StockRecord, StockTable};
    use chrono::NaiveDate;

    fn table() -> StockTable {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        StockTable::from_records(vec![
            StockRecord::new(d(1), 10.0, 11.0, 2_000_000.0, None, "Monday"),
            StockRecord::new(d(2), 11.0, 10.0, 1_000_000.0, Some(-9.09), "Tuesday"),
        ])
    }

    #[test]
    fn test_render_line_chart() {
        let table = table();
        let view = FilteredView::new(table.records().iter().collect());
        let text = render_text(&build_chart(ChartKind::DailyReturn, &view, "GOOGL"));
        assert!(text.starts_with("# Retorno Diário (%) da ação GOOGL"));
        assert!(text.contains("2024-01-02"));
        assert!(text.contains("-9.09%"));
    }

    #[test]
    fn test_render_volume_bars() {
        let table = table();
        let view = FilteredView::new(table.records().iter().collect());
        let text = render_text(&build_chart(ChartKind::DailyVolume, &view, "GOOGL"));
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().find(|l| l.starts_with("2024-01-01")).unwrap();
        assert!(first.contains("2.0M"));
        assert_eq!(first.matches('█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_render_pie() {
        let table = table();
        let view = FilteredView::new(table.records().iter().collect());
        let text = render_text(&build_chart(ChartKind::UpDownPie, &view, "GOOGL"));
        assert!(text.contains("Subiu"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("Total"));
    }

    #[test]
    fn test_render_empty_chart() {
        let view = FilteredView::default();
        let text = render_text(&build_chart(ChartKind::UpDownPie, &view, "GOOGL"));
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("NaN"));
    }
}
