//! # Wallet Connectors
//!
//! A [`Connector`] is one pluggable wallet integration (for example the
//! MetaMask browser extension). The core treats the handshake as opaque: it only
//! asks for readiness and for account access, and receives an address or a
//! [`ConnectorError`].

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;

/// Stable identifier of a connector (e.g. `"metaMask"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectorId(String);

impl ConnectorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConnectorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable snapshot of a connector, as listed on the connect screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorDescriptor {
    pub id: ConnectorId,
    pub name: String,
    pub ready: bool,
}

/// Wallet integration capability.
///
/// Futures are not required to be `Send`: browser wallets are driven from the
/// single UI thread.
#[async_trait(?Send)]
pub trait Connector {
    fn id(&self) -> ConnectorId;

    /// Human-readable name
    fn name(&self) -> String;

    /// Whether the integration can be used right now (extension installed, etc.)
    fn ready(&self) -> bool;

    /// Prompt the wallet for account access on `expected_chain_id`.
    ///
    /// Returns the selected account address.
    async fn request_accounts(&self, expected_chain_id: u64) -> Result<String, ConnectorError>;

    /// Account the wallet has already authorized for this site, if any.
    ///
    /// Must not prompt the user.
    async fn authorized_account(&self) -> Option<String> {
        None
    }

    /// Release wallet-side resources after the session ends.
    fn disconnect(&self) {}

    fn descriptor(&self) -> ConnectorDescriptor {
        ConnectorDescriptor {
            id: self.id(),
            name: self.name(),
            ready: self.ready(),
        }
    }
}
