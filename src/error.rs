use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures of the showcase application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}
