use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiqError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
