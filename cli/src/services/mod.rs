pub mod csv_service;

pub use csv_service::{default_data_path, CsvDataService, DEFAULT_DATA_FILE};
