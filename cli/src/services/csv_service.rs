use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    error::{DashboardError, Result},
    models::{columns, RawStockRecord, StockTable},
    utils::{Logger, Timer},
};

/// File name looked up next to the executable when no path is configured
pub const DEFAULT_DATA_FILE: &str = "dados_tratados.csv";

/// Loads the pre-processed price table from CSV and normalizes it
pub struct CsvDataService {
    logger: Logger,
}

impl CsvDataService {
    pub fn new() -> Self {
        Self {
            logger: Logger::new("CSV_SERVICE"),
        }
    }

    /// Read and normalize the table at `path`
    pub fn load(&self, path: &Path) -> Result<StockTable> {
        self.logger.info(&format!("Loading price table from {}", path.display()));
        let timer = Timer::start("price table load");

        let file = File::open(path).map_err(|source| DashboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = self.load_from_reader(file)?;

        self.logger.info(&format!(
            "Loaded {} rows ({:.1}ms)",
            table.len(),
            timer.elapsed_ms()
        ));
        Ok(table)
    }

    /// Read and normalize a table from any CSV source
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<StockTable> {
        let raw = self.parse_csv(reader)?;
        let table = StockTable::normalize(&raw)?;

        if let (Some(first), Some(last)) = (table.min_date(), table.max_date()) {
            self.logger.debug_with_data(
                &format!("Date span {} to {}", first, last),
                table.years(),
            );
        }
        Ok(table)
    }

    /// Parse raw rows, checking the header for every required column first
    fn parse_csv<R: Read>(&self, reader: R) -> Result<Vec<RawStockRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for required in columns::REQUIRED {
            if !headers.iter().any(|h| h == required) {
                return Err(DashboardError::MissingColumn(required.to_string()));
            }
        }

        let has_year = headers.iter().any(|h| h == columns::YEAR);
        let has_up = headers.iter().any(|h| h == columns::UP);
        self.logger.debug(&format!(
            "Header ok ({} columns, Year present: {}, Up present: {})",
            headers.len(),
            has_year,
            has_up
        ));

        let mut rows = Vec::new();
        for (idx, result) in reader.deserialize::<RawStockRecord>().enumerate() {
            let row = result.map_err(|e| DashboardError::MalformedInput {
                row: idx + 1,
                reason: e.to_string(),
            })?;
            rows.push(row);
        }
        Ok(rows)
    }
}

impl Default for CsvDataService {
    fn default() -> Self {
        Self::new()
    }
}

/// Default table location: alongside the running executable, else the working directory
pub fn default_data_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DATA_FILE)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}
