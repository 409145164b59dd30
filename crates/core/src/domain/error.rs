// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Version string is empty")]
    EmptyVersion,

    #[error("Invalid distribution name: {0:?}")]
    InvalidDistributionName(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
