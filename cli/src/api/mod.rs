//! High-level API for driving the dashboard
//!
//! [`Dashboard`] owns the loaded table and handles one chart request at a time.

pub mod builder;
pub mod dashboard;

pub use builder::ChartRequestBuilder;
pub use dashboard::{ChartOption, ChartRequest, Controls, Dashboard, DEFAULT_TICKER};
