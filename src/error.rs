use thiserror::Error;

#[derive(Debug, Error)]
pub enum Osc52Error {
    #[error("Write cancelled before the sequence was sent")]
    Cancelled,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
