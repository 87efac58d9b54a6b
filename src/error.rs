use thiserror::Error;

use crate::config::ConfigError;
use crate::service::ServiceError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Answer service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No reply received for: {0}")]
    NoReply(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, ChatError>;
