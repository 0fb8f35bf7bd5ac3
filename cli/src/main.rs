use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use stockdash::{
    analysis::count_up_down,
    api::{ChartRequest, Dashboard},
    models::{ChartKind, FilteredView},
    render::render_text,
    services::{default_data_path, CsvDataService},
    utils::{format_date, init_logger, parse_request_date, split_list},
};

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "Filter a daily stock price table by year, dates and weekdays and render dashboard charts")]
pub struct Cli {
    /// Price table CSV (defaults to dados_tratados.csv next to the executable)
    #[arg(long, global = true, env = "STOCKDASH_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Ticker shown in chart titles
    #[arg(long, global = true, default_value = stockdash::api::DEFAULT_TICKER)]
    pub ticker: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show selector options and their defaults
    Controls,
    /// Render one chart for the given selections
    Render {
        /// Chart kind (slug such as up-down-pie, or its selector label)
        #[arg(short, long)]
        chart: Option<String>,
        /// Year to show
        #[arg(short, long)]
        year: Option<i32>,
        /// First date (YYYY-MM-DD), inclusive
        #[arg(long)]
        start: Option<String>,
        /// Last date (YYYY-MM-DD), inclusive
        #[arg(long)]
        end: Option<String>,
        /// Weekday names, comma-separated or repeated
        #[arg(short, long, num_args = 0..)]
        weekdays: Option<Vec<String>>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print row count, date span and overall up/down days
    Summary,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let cli = Cli::parse();

    let data_file = cli.data_file.unwrap_or_else(default_data_path);
    let table = CsvDataService::new()
        .load(&data_file)
        .with_context(|| format!("failed to load price table {}", data_file.display()))?;
    let dashboard = Dashboard::new(table)?.with_ticker(cli.ticker);

    match cli.command {
        Commands::Controls => {
            let controls = dashboard.controls();
            let years: Vec<String> = controls.years.iter().map(i32::to_string).collect();
            println!("Anos:            {} (padrão {})", years.join(", "), controls.default_year);
            println!(
                "Datas:           {} a {}",
                format_date(controls.min_date),
                format_date(controls.max_date)
            );
            println!("Dias da semana:  {}", controls.weekdays.join(", "));
            println!("Gráficos:");
            for option in &controls.charts {
                let marker = if option.kind == controls.default_chart { "*" } else { " " };
                println!("  {} {:<22} {}", marker, option.kind.as_str(), option.label);
            }
        }
        Commands::Render {
            chart,
            year,
            start,
            end,
            weekdays,
            format,
        } => {
            let request = ChartRequest {
                chart: chart.as_deref().map(str::parse::<ChartKind>).transpose()?,
                year,
                start_date: start.as_deref().map(parse_request_date).transpose()?,
                end_date: end.as_deref().map(parse_request_date).transpose()?,
                weekdays: weekdays.map(|w| split_list(&w)),
            };
            let chart = dashboard.render(&request)?;
            match format {
                OutputFormat::Text => println!("{}", render_text(&chart)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
            }
        }
        Commands::Summary => {
            let table = dashboard.table();
            let all = FilteredView::new(table.records().iter().collect());
            let counts = count_up_down(&all);
            println!("Linhas:  {}", table.len());
            println!(
                "Período: {} a {}",
                format_date(dashboard.controls().min_date),
                format_date(dashboard.controls().max_date)
            );
            println!("Subiu:   {}", counts.up);
            println!("Caiu:    {}", counts.down);
        }
    }

    Ok(())
}
