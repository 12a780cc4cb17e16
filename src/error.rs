use thiserror::Error;

/// Represents errors that can occur in the certgroup library.
///
/// Parsing a purposes specifier never fails; bad input is surfaced through
/// [`crate::specifier::ParseReport`] diagnostics instead. These errors cover
/// the fallible edges: distinguished-name validation and X.509 extension
/// encoding.
#[derive(Debug, Error, Clone)]
pub enum CertGroupError {
    /// Error during data encoding.
    #[error("Failed to encode data: {0}")]
    EncodingError(String),

    /// Error due to invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<der::Error> for CertGroupError {
    /// Converts a `der::Error` into a `CertGroupError`.
    fn from(err: der::Error) -> Self {
        CertGroupError::EncodingError(err.to_string())
    }
}
