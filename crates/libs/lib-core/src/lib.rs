//! # Core Library
//!
//! Platform-independent core of the Alchemon dashboard: network configuration,
//! the wallet session store, and the view models of the connect and dashboard
//! screens. Browser specifics (the injected wallet, HTTP, the router) are
//! supplied by the front end through the [`Connector`], [`AssetIndexer`] and
//! [`Navigator`] traits.
//!
//! ## Modules
//!
//! - [`config`] - Chain and indexing endpoint configuration
//! - [`error`] - [`AppError`] and the connector / fetch failure taxonomy
//! - [`connector`] - Wallet integration capability
//! - [`session`] - [`SessionStore`], the single owner of the wallet session
//! - [`routing`] - Routes, navigation, query parameters
//! - [`indexer`] - NFT lookup contract and contract-address filter
//! - [`connect`] - Connect screen view model
//! - [`dashboard`] - Session-gated fetch workflow of the dashboard

pub mod config;
pub mod connect;
pub mod connector;
pub mod dashboard;
pub mod error;
pub mod indexer;
pub mod routing;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::{Config, NetworkConfig};
pub use connect::{ConnectScreen, ConnectorEntry};
pub use connector::{Connector, ConnectorDescriptor, ConnectorId};
pub use dashboard::{DashboardState, DashboardWorkflow, MountOutcome};
pub use error::{AppError, ConnectorError, FetchError, Result};
pub use indexer::{filter_by_contract, AssetIndexer, AssetRecord};
pub use routing::{Navigator, QueryParams, Route};
pub use session::{ConnectionState, Session, SessionStore};
