use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("Invalid side '{0}' (expected long/short or buy/sell)")]
    InvalidSide(String),

    #[error("Invalid timestamp '{value}' at line {line}")]
    InvalidTimestamp { value: String, line: usize },
}

pub type Result<T> = std::result::Result<T, JournalError>;
