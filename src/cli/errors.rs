use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid template name: {template:?}")]
    InvalidTemplate { template: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load config file {path}: {source}")]
    Config {
        path: String,
        source: nbreport::Error,
    },

    #[error(transparent)]
    Report(#[from] nbreport::Error),
}
