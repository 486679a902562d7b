use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Data access error for {path}: {reason}")]
    DataAccess { path: String, reason: String },
}
