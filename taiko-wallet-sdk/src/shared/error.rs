//! Error handling for the wallet SDK
//!
//! This module defines the error type returned by every fallible operation.
//! Collaborator failures are passed through unchanged in meaning: nothing in
//! the SDK retries or recovers locally.

use ethers::providers::ProviderError;
use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Protection error: {0}")]
    Protection(String),
}

impl WalletError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a signing error
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a protection error
    pub fn protection(message: impl Into<String>) -> Self {
        Self::Protection(message.into())
    }
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        Self::network(format!("RPC request failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_creation() {
        let input_error = WalletError::invalid_input("bad address");
        let precondition_error = WalletError::precondition("shield disabled");
        let signing_error = WalletError::signing("no account");

        assert!(matches!(input_error, WalletError::InvalidInput(_)));
        assert!(matches!(precondition_error, WalletError::Precondition(_)));
        assert!(matches!(signing_error, WalletError::Signing(_)));
    }

    #[test]
    fn test_provider_error_conversion() {
        let provider_error = ProviderError::CustomError("connection refused".to_string());
        let wallet_error: WalletError = provider_error.into();

        assert!(matches!(wallet_error, WalletError::Network(_)));
        assert!(wallet_error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_display() {
        let error = WalletError::config("unknown network identifier: GOERLI");
        let display = format!("{}", error);

        assert!(display.contains("Configuration error"));
        assert!(display.contains("GOERLI"));
    }
}
