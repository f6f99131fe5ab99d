// ABOUTME: Error types for the deckgen application
// ABOUTME: Provides structured error handling for deck rendering and packaging

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ODP packaging error: {0}")]
    PackageError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our DeckError
impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::PackageError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
