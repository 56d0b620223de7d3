// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate external initiator: {0}")]
    DuplicateInitiator(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
