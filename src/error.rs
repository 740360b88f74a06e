//! breedfetch error types

/// breedfetch error types
#[derive(Debug, thiserror::Error)]
pub enum BreedFetchError {
    /// The sub-breeds of a breed could not be determined, for any reason.
    ///
    /// Carries the breed string exactly as the caller passed it in.
    #[error("breed not found: {0}")]
    BreedNotFound(String),

    // Data errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl BreedFetchError {
    /// Whether this is a [`BreedNotFound`](Self::BreedNotFound) error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BreedFetchError::BreedNotFound(_))
    }

    /// The breed this error refers to, if any.
    pub fn breed(&self) -> Option<&str> {
        match self {
            BreedFetchError::BreedNotFound(breed) => Some(breed),
            _ => None,
        }
    }
}

/// Result type alias for breedfetch operations
pub type Result<T> = std::result::Result<T, BreedFetchError>;
