use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesDashboardError {
    #[error("Invalid value '{value}' for {field}: expected a non-negative number")]
    InvalidInput { field: String, value: String },

    #[error("Day {day} not found in month {month_index} of {year}")]
    DayNotFound {
        year: String,
        month_index: usize,
        day: u32,
    },

    #[error("Year {0} is not part of the dataset")]
    YearNotFound(String),

    #[error("Invalid month index {0}: must be between 0 and 11")]
    MonthOutOfRange(usize),

    #[error("Invalid jitter {0}: must be between 0.0 and 1.0")]
    InvalidJitter(f64),

    #[error("Invalid status message duration {0}s: must be between 1 and 86400 seconds")]
    InvalidStatusTtl(i64),

    #[error("Invalid sales source for year {year}: {details}")]
    InvalidSource { year: String, details: String },

    #[error("Aggregate mismatch in {scope}: expected {expected}, got {actual}")]
    AggregateMismatch {
        scope: String,
        expected: f64,
        actual: f64,
    },

    #[error("Date calculation error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SalesDashboardError>;
