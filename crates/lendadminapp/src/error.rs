use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;
