// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] crate::port::MetadataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// True when the underlying cause is a missing metadata entry
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Metadata(e) if e.is_not_found())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
