//! Domain-level errors

use thiserror::Error;

/// Errors raised while parsing domain settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Unknown IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Unsupported locale code
    #[error("Invalid locale: {0} (expected 'fr' or 'en')")]
    InvalidLocale(String),
}
