//! Error types for the portfolio sections

use std::time::Duration;

use thiserror::Error;

use crate::records::FieldId;

/// Main error type for portfolio operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// The email relay reported a failure without more detail
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// The email relay answered with a non-success status
    #[error("Email relay rejected the request ({status}): {body}")]
    RelayRejected { status: u16, body: String },

    /// No answer from the email relay within the configured window
    #[error("Email relay did not answer within {0:?}")]
    RelayTimeout(Duration),

    /// Transport-level failure talking to the relay
    #[error("Network error: {0}")]
    Network(String),

    /// A required form field was left empty
    #[error("Field is empty: {0}")]
    EmptyField(FieldId),

    /// Invalid operation for the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Bad configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for PortfolioError {
    fn from(err: reqwest::Error) -> Self {
        PortfolioError::Network(err.to_string())
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::RelayRejected {
            status: 400,
            body: "The user ID is invalid".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Email relay rejected the request (400): The user ID is invalid"
        );
    }

    #[test]
    fn test_empty_field_display() {
        let err = PortfolioError::EmptyField(FieldId::Email);
        assert_eq!(format!("{}", err), "Field is empty: Email");
    }
}
