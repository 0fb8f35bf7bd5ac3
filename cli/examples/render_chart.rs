//! Render Chart Example
//!
//! Builds a small in-memory price table and renders every chart kind for one selection.

use chrono::NaiveDate;
use stockdash::prelude::*;
use stockdash::render::render_text;
use std::error::Error;

const SAMPLE: &str = "data,Abertura,Fechamento,Volume,Retorno_Diário_Pct,Dia_da_Semana
2024-01-02,138.55,138.17,23711200,,Tuesday
2024-01-03,137.25,138.92,24212100,0.54,Wednesday
2024-01-04,138.42,136.39,27137700,-1.82,Thursday
2024-01-05,136.75,135.73,22506000,-0.48,Friday
2024-01-08,136.29,138.84,21404000,2.29,Monday
2024-01-09,138.50,140.95,24759600,1.52,Tuesday
";

fn main() -> Result<(), Box<dyn Error>> {
    stockdash::init_logger()?;

    let table = CsvDataService::new().load_from_reader(SAMPLE.as_bytes())?;
    let dashboard = Dashboard::new(table)?;

    println!("Loaded {} rows", dashboard.table().len());
    println!("{}", "=".repeat(60));

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid date")?;
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("invalid date")?;

    for kind in ChartKind::ALL {
        let request = ChartRequestBuilder::new()
            .with_chart(kind)
            .with_year(2024)
            .with_date_range(start, end)
            .with_weekdays(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"])
            .build();
        let chart = dashboard.render(&request)?;
        println!("{}\n", render_text(&chart));
    }

    Ok(())
}
