//! Turns a filtered view into the series each chart kind draws.
//!
//! Line and time-bar charts are identity extractions of view columns; the pie and weekday bar
//! charts go through [`count_up_down`] and [`sum_up_by_weekday`].

use crate::analysis::aggregate::{count_up_down, sum_up_by_weekday};
use crate::models::{
    percent_of, ChartBody, ChartKind, ChartRender, FilteredView, PieSlice, Series, StockRecord,
    COLOR_CLOSE, COLOR_DOWN, COLOR_OPEN, COLOR_RETURN, COLOR_UP, COLOR_VOLUME, COLOR_WEEKDAY_BAR,
};
use crate::utils::format_date;

const LABEL_DATE: &str = "Data";

/// Build the render instruction for `kind` over `view`
pub fn build_chart(kind: ChartKind, view: &FilteredView<'_>, ticker: &str) -> ChartRender {
    let (subtitle, title, x_label, y_label, body) = match kind {
        ChartKind::CloseVsOpen => (
            format!("Preço de Fechamento da Ação {}", ticker),
            "Preço de Abertura x Fechamento".to_string(),
            Some(LABEL_DATE),
            Some("Preço"),
            ChartBody::Line {
                x: view.dates(),
                series: vec![
                    series("Fechamento", COLOR_CLOSE, view, |r| Some(r.close())),
                    series("Abertura", COLOR_OPEN, view, |r| Some(r.open())),
                ],
            },
        ),
        ChartKind::UpDownPie => (
            "Dias que Subiu x Caiu".to_string(),
            "Proporção de dias que a ação subiu x caiu".to_string(),
            None,
            None,
            up_down_pie(view),
        ),
        ChartKind::WeekdayUpSharePie => (
            "Proporção de dias que a ação subiu por dia da semana".to_string(),
            "Proporção de dias que a ação subiu por dia da semana".to_string(),
            None,
            None,
            weekday_pie(view),
        ),
        ChartKind::WeekdayUpDaysBar => (
            "Número de dias que a ação subiu por dia da semana".to_string(),
            "Número de dias que a ação subiu por dia da semana".to_string(),
            Some("Dia da Semana"),
            Some("Quantidade de Dias"),
            weekday_bar(view),
        ),
        ChartKind::DailyReturn => (
            format!("Retorno Diário (%) da ação {}", ticker),
            format!("Retorno Diário (%) {}", ticker),
            Some(LABEL_DATE),
            Some("Retorno (%)"),
            ChartBody::Line {
                x: view.dates(),
                series: vec![series("Retorno (%)", COLOR_RETURN, view, StockRecord::daily_return_pct)],
            },
        ),
        ChartKind::DailyVolume => (
            format!("Volume diário de negociações {}", ticker),
            format!("Volume diário de negociações {}", ticker),
            Some(LABEL_DATE),
            Some("Volume"),
            ChartBody::Bar {
                categories: view.iter().map(|r| format_date(r.date())).collect(),
                series: series("Volume", COLOR_VOLUME, view, |r| Some(r.volume())),
            },
        ),
    };

    ChartRender {
        kind,
        subtitle,
        title,
        x_label: x_label.map(String::from),
        y_label: y_label.map(String::from),
        row_count: view.len(),
        empty: body.is_empty(),
        body,
    }
}

fn series<F>(name: &str, color: &str, view: &FilteredView<'_>, value: F) -> Series
where
    F: Fn(&StockRecord) -> Option<f64>,
{
    Series {
        name: name.to_string(),
        color: color.to_string(),
        values: view.iter().map(value).collect(),
    }
}

fn up_down_pie(view: &FilteredView<'_>) -> ChartBody {
    let counts = count_up_down(view);
    let total = counts.total();
    ChartBody::Pie {
        total,
        slices: vec![
            PieSlice {
                label: "Subiu".to_string(),
                value: counts.up,
                percent: percent_of(counts.up, total),
                color: Some(COLOR_UP.to_string()),
            },
            PieSlice {
                label: "Caiu".to_string(),
                value: counts.down,
                percent: percent_of(counts.down, total),
                color: Some(COLOR_DOWN.to_string()),
            },
        ],
    }
}

fn weekday_pie(view: &FilteredView<'_>) -> ChartBody {
    let sums = sum_up_by_weekday(view);
    let total: u64 = sums.values().sum();
    ChartBody::Pie {
        total,
        slices: sums
            .into_iter()
            .map(|(weekday, value)| PieSlice {
                label: weekday,
                value,
                percent: percent_of(value, total),
                color: None,
            })
            .collect(),
    }
}

fn weekday_bar(view: &FilteredView<'_>) -> ChartBody {
    let sums = sum_up_by_weekday(view);
    ChartBody::Bar {
        categories: sums.keys().cloned().collect(),
        series: Series {
            name: "Dias que subiu".to_string(),
            color: COLOR_WEEKDAY_BAR.to_string(),
            values: sums.values().map(|&v| Some(v as f64)).collect(),
        },
    }
}
