use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Sales data format error: {0}")]
    DataFormatError(String),

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
