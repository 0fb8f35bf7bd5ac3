//! # stockdash - Stock Price Dashboard Core
//!
//! Loads a pre-processed daily price table and produces the series behind six dashboard
//! charts:
//! - CSV loading with date coercion, sorting and derived `year` / up-day columns
//! - Year, inclusive date range and weekday filtering
//! - Up/down counts and up days per weekday
//! - Render instructions as JSON or plain text
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stockdash::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = CsvDataService::new().load(std::path::Path::new("dados_tratados.csv"))?;
//!     let dashboard = Dashboard::new(table)?;
//!     let request = ChartRequestBuilder::new()
//!         .with_chart(ChartKind::UpDownPie)
//!         .with_year(2024)
//!         .build();
//!     let chart = dashboard.render(&request)?;
//!     println!("{}", stockdash::render::render_text(&chart));
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

// Prelude for convenient imports
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use stockdash::prelude::*;
    //! ```

    pub use crate::analysis::{count_up_down, filter, sum_up_by_weekday, FilterParams, UpDownCount};
    pub use crate::api::{ChartRequest, ChartRequestBuilder, Controls, Dashboard};
    pub use crate::error::DashboardError;
    pub use crate::models::{ChartBody, ChartKind, ChartRender, FilteredView, StockRecord, StockTable};
    pub use crate::services::CsvDataService;
}

pub use error::DashboardError;
pub use utils::{init_logger, Logger, Timer};
