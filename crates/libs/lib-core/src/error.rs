//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the core library,
//! together with the two failure families it wraps:
//!
//! - [`ConnectorError`] - wallet handshake failures (user rejection, connector
//!   unavailable, wrong network). Recovered locally: the session returns to
//!   `Disconnected` and the message is shown on the connect screen.
//! - [`FetchError`] - NFT indexing failures (network, HTTP status, decoding,
//!   timeout, abort). The dashboard renders them as a visible error state.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, ConnectorError, Result};
//!
//! fn require_ready(ready: bool) -> Result<()> {
//!     if !ready {
//!         return Err(ConnectorError::Unavailable("MetaMask".to_string()).into());
//!     }
//!     Ok(())
//! }
//!
//! let err = require_ready(false).unwrap_err();
//! assert_eq!(err.user_message(), "MetaMask is not available");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wallet connector failure.
    #[error("Connector error: {0}")]
    Connector(#[from] ConnectorError),

    /// A connection attempt is already in flight.
    #[error("A connection request is already pending")]
    Busy,

    /// NFT indexing service failure.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a wallet connection attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    /// The user dismissed or rejected the wallet prompt.
    #[error("User rejected the request.")]
    UserRejected,

    /// The wallet integration is not installed or not ready.
    #[error("{0} is not available")]
    Unavailable(String),

    /// The wallet is on a different chain and refused to switch.
    #[error("Wrong network: expected chain {expected}, wallet is on chain {actual}")]
    NetworkMismatch { expected: u64, actual: u64 },

    /// No connector with this id is configured.
    #[error("Unknown connector: {0}")]
    UnknownConnector(String),

    /// Any other failure reported by the wallet.
    #[error("{0}")]
    Other(String),
}

/// Why an NFT lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Indexing service returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Connector(err) => err.to_string(),
            AppError::Busy => self.to_string(),
            AppError::Fetch(FetchError::Timeout(_)) => {
                "The NFT service took too long to respond".to_string()
            }
            AppError::Fetch(_) => "Could not load your NFTs. Please try again later.".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

/// Convert environment lookup failures into configuration errors.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Convert `serde_json::Error` to `FetchError`.
impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_messages() {
        assert_eq!(
            AppError::from(ConnectorError::UserRejected).user_message(),
            "User rejected the request."
        );
        assert_eq!(
            AppError::from(ConnectorError::NetworkMismatch { expected: 11_155_111, actual: 1 }).user_message(),
            "Wrong network: expected chain 11155111, wallet is on chain 1"
        );
    }

    #[test]
    fn test_fetch_messages_hide_details() {
        let err = AppError::from(FetchError::Network("dns failure".to_string()));
        assert_eq!(err.to_string(), "Fetch error: Network error: dns failure");
        assert_eq!(err.user_message(), "Could not load your NFTs. Please try again later.");

        let err = AppError::from(FetchError::Timeout(10_000));
        assert_eq!(err.user_message(), "The NFT service took too long to respond");
    }

    #[test]
    fn test_env_error_maps_to_config() {
        let err = AppError::from(lib_utils::envs::Error::MissingEnv("ALCHEMY_API_KEY"));
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
