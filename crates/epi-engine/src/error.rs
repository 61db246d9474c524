use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("simulation configuration rejected: {0}")]
    Config(#[from] EpiError),
}

pub type EngineResult<T> = Result<T, EngineError>;
