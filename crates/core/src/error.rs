//! Error types for the Mentor domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.
//!
//! Three failure classes exist at runtime:
//! - missing credentials at startup (fatal, surfaced by the CLI before a
//!   session is created),
//! - curriculum fetch failures (recoverable — the loader substitutes the
//!   built-in sample text),
//! - backend call failures (recoverable — surfaced for that turn only, the
//!   session stays usable).

use thiserror::Error;

/// The top-level error type for all Mentor operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Curriculum errors ---
    #[error("Curriculum error: {0}")]
    Curriculum(#[from] CurriculumError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by backend, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Why the curriculum loader fell back to the built-in sample content.
///
/// Every variant is recoverable: the caller substitutes the sample text and
/// continues. The variants split into two classes — the store answered but
/// the data had the wrong shape, or the store could not be reached/queried
/// at all.
#[derive(Debug, Clone, Error)]
pub enum CurriculumError {
    #[error("Curriculum datastore is not configured")]
    NotConfigured,

    #[error("Invalid curriculum document id '{0}'")]
    InvalidId(String),

    #[error("Curriculum store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("No curriculum document found for id '{0}'")]
    MissingDocument(String),

    #[error("Malformed curriculum document: {0}")]
    MalformedDocument(String),
}

impl CurriculumError {
    /// True when the failure came from the connection/query layer (or an
    /// unparseable id), as opposed to a reachable store returning data of
    /// the wrong shape.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::InvalidId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn curriculum_error_displays_correctly() {
        let err = Error::Curriculum(CurriculumError::MissingDocument("abc-123".into()));
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn store_failures_classified() {
        assert!(CurriculumError::StoreUnavailable("refused".into()).is_store_failure());
        assert!(CurriculumError::InvalidId("nope".into()).is_store_failure());
        assert!(!CurriculumError::MissingDocument("id".into()).is_store_failure());
        assert!(!CurriculumError::MalformedDocument("no sections".into()).is_store_failure());
        assert!(!CurriculumError::NotConfigured.is_store_failure());
    }
}
