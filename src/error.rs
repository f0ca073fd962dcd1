use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BibError {
    #[error("Failed to load data file: {0}")]
    Io(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid data format: {0}")]
    InvalidData(String),
}
