pub mod chart;
pub mod stock_data;
pub mod table;

pub use chart::*;
pub use stock_data::*;
pub use table::*;
