//! Transfer error types

use thiserror::Error;

/// Transfer error types
///
/// Precondition failures map to 400, storage failures to 500.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("No sender ID provided or invalid ID!")]
    InvalidSender,

    #[error("No receiver ID provided or invalid ID!")]
    InvalidReceiver,

    #[error("No amount provided!")]
    MissingAmount,

    #[error("Insufficient funds!")]
    InsufficientFunds,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidSender => "INVALID_SENDER",
            TransferError::InvalidReceiver => "INVALID_RECEIVER",
            TransferError::MissingAmount => "MISSING_AMOUNT",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidSender
            | TransferError::InvalidReceiver
            | TransferError::MissingAmount
            | TransferError::InsufficientFunds => 400,
            TransferError::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::InvalidSender.code(), "INVALID_SENDER");
        assert_eq!(TransferError::InvalidReceiver.code(), "INVALID_RECEIVER");
        assert_eq!(
            TransferError::InsufficientFunds.code(),
            "INSUFFICIENT_FUNDS"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::InvalidSender.http_status(), 400);
        assert_eq!(TransferError::InsufficientFunds.http_status(), 400);
        assert_eq!(
            TransferError::Database(sqlx::Error::RowNotFound).http_status(),
            500
        );
    }

    #[test]
    fn test_display() {
        let err = TransferError::InsufficientFunds;
        assert_eq!(err.to_string(), "Insufficient funds!");
    }
}
