use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("Failed to encode topology: {0}")]
    Encode(#[from] serde_json::Error),
}
