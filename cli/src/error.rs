use std::path::PathBuf;

/// Errors raised while loading the price table or resolving a chart request.
///
/// Load-time variants (`Io`, `Csv`, `MissingColumn`, `MalformedInput`, `NoRecords`) are fatal
/// for the process; request-time variants only fail the rendering pass that produced them.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("malformed input at row {row}: {reason}")]
    MalformedInput { row: usize, reason: String },

    #[error("price table contains no records")]
    NoRecords,

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown weekday '{value}', expected one of: {}", .known.join(", "))]
    UnknownWeekday { value: String, known: Vec<String> },

    #[error("unknown chart kind '{0}'")]
    UnknownChartKind(String),
}

impl DashboardError {
    /// True for errors caused by the caller's request rather than by the loaded data.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            DashboardError::InvalidDate(_)
                | DashboardError::UnknownWeekday { .. }
                | DashboardError::UnknownChartKind(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
