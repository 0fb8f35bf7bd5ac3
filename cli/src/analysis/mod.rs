//! Filter and aggregation pipeline run on every rendering pass

pub mod aggregate;
pub mod chart_builder;
pub mod filter;

pub use aggregate::{count_up_down, sum_up_by_weekday, UpDownCount};
pub use chart_builder::build_chart;
pub use filter::{filter, FilterParams};
