use thiserror::Error;

pub type Result<T, E = DraftError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("table storage error: {0}")]
    Storage(String),
}
