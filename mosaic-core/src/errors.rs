use thiserror::Error;

pub type Result<T> = std::result::Result<T, MosaicError>;

#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
