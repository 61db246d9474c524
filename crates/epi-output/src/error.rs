use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
