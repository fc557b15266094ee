//! # Wallet Session
//!
//! [`SessionStore`] is the wallet session provider: it owns the single
//! [`Session`] value, the configured connectors, and the only code paths that
//! change the session (`connect`, `disconnect`, `auto_connect` and wallet
//! account-change events). Screens hold a reference to the store and read
//! snapshots; they never mutate the session directly.
//!
//! ## State Machine
//!
//! ```text
//!                 connect(id)                 wallet returns address
//! Disconnected ───────────────▶ Connecting ───────────────────────────▶ Connected
//!      ▲                            │                                      │
//!      │        wallet error        │                                      │
//!      └────────────────────────────┘                                      │
//!      └───────────────────────────── disconnect() ────────────────────────┘
//! ```
//!
//! `address` is set if and only if the state is `Connected`.
//!
//! ## Concurrency
//!
//! All access happens on one thread, so the session lives in a `RefCell` and is
//! never borrowed across an `.await`. A second `connect` while one is in flight
//! is rejected with [`AppError::Busy`]; the pending attempt is not disturbed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::NetworkConfig;
use crate::connector::{Connector, ConnectorDescriptor, ConnectorId};
use crate::error::{AppError, ConnectorError, Result};

/// Connection state of the wallet session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// In-memory record of wallet connection state.
///
/// Fields are private so the address/state invariant cannot be broken from
/// outside; construct through [`Session::disconnected`] or the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    state: ConnectionState,
    address: Option<String>,
    active_connector: Option<ConnectorId>,
}

impl Session {
    pub fn disconnected() -> Self {
        Self::default()
    }

    fn connecting(connector: ConnectorId) -> Self {
        Self {
            state: ConnectionState::Connecting,
            address: None,
            active_connector: Some(connector),
        }
    }

    fn connected(address: String, connector: ConnectorId) -> Self {
        Self {
            state: ConnectionState::Connected,
            address: Some(address),
            active_connector: Some(connector),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn active_connector(&self) -> Option<&ConnectorId> {
        self.active_connector.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// True while a handshake through `connector` is in flight.
    pub fn is_connecting_with(&self, connector: &ConnectorId) -> bool {
        self.state == ConnectionState::Connecting && self.active_connector.as_ref() == Some(connector)
    }
}

/// Callback invoked with the new session after every transition
pub type SessionListener = Box<dyn Fn(&Session)>;

/// Owner of the wallet session.
pub struct SessionStore {
    network: NetworkConfig,
    connectors: Vec<Rc<dyn Connector>>,
    session: RefCell<Session>,
    listeners: RefCell<Vec<SessionListener>>,
    /// Bumped whenever an in-flight handshake must be discarded
    generation: Cell<u64>,
}

impl SessionStore {
    /// Create a store in the `Disconnected` state.
    ///
    /// Connector order is preserved by [`list_connectors`](Self::list_connectors).
    pub fn new(network: NetworkConfig, connectors: Vec<Rc<dyn Connector>>) -> Self {
        Self {
            network,
            connectors,
            session: RefCell::new(Session::disconnected()),
            listeners: RefCell::new(Vec::new()),
            generation: Cell::new(0),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Available wallet integrations, readiness re-read on every call.
    pub fn list_connectors(&self) -> Vec<ConnectorDescriptor> {
        self.connectors.iter().map(|c| c.descriptor()).collect()
    }

    /// Register a change listener.
    ///
    /// Listeners run synchronously after each transition and must not call
    /// `subscribe` themselves.
    pub fn subscribe(&self, listener: SessionListener) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Establish a session through the connector `id`.
    ///
    /// On success the session is `Connected` and the address is returned. On
    /// failure the session is `Disconnected` and the reason is returned.
    pub async fn connect(&self, id: &ConnectorId) -> Result<String> {
        let connector = self
            .find(id)
            .ok_or_else(|| ConnectorError::UnknownConnector(id.to_string()))?;

        let previous = {
            let session = self.session.borrow();
            match session.state {
                ConnectionState::Connecting => {
                    tracing::warn!(connector = %id, "connect rejected: attempt already in flight");
                    return Err(AppError::Busy);
                }
                ConnectionState::Connected if session.active_connector.as_ref() == Some(id) => {
                    if let Some(address) = session.address.clone() {
                        return Ok(address);
                    }
                    None
                }
                ConnectionState::Connected => session.active_connector.clone(),
                ConnectionState::Disconnected => None,
            }
        };

        if !connector.ready() {
            tracing::warn!(connector = %id, "connect rejected: connector not ready");
            return Err(ConnectorError::Unavailable(connector.name()).into());
        }

        // Switching wallets ends the previous session first
        if let Some(previous_id) = previous {
            if let Some(previous_connector) = self.find(&previous_id) {
                previous_connector.disconnect();
            }
        }

        let generation = self.bump_generation();
        self.transition(Session::connecting(id.clone()));
        tracing::debug!(connector = %id, chain_id = self.network.chain_id, "requesting wallet accounts");

        let result = connector.request_accounts(self.network.chain_id).await;

        if self.generation.get() != generation {
            tracing::debug!(connector = %id, "discarding handshake result: session was reset");
            return Err(ConnectorError::Other("Connection cancelled".to_string()).into());
        }

        match result {
            Ok(address) if address.trim().is_empty() => {
                self.transition(Session::disconnected());
                Err(ConnectorError::Other("Wallet returned no account".to_string()).into())
            }
            Ok(address) => {
                tracing::info!(connector = %id, address = %address, "wallet connected");
                self.transition(Session::connected(address.clone(), id.clone()));
                Ok(address)
            }
            Err(err) => {
                tracing::info!(connector = %id, error = %err, "wallet connection failed");
                self.transition(Session::disconnected());
                Err(err.into())
            }
        }
    }

    /// Reset to `Disconnected` and clear the address.
    ///
    /// An in-flight handshake is abandoned: its result will be discarded.
    pub fn disconnect(&self) {
        let active = self.session.borrow().active_connector.clone();
        if let Some(connector) = active.as_ref().and_then(|id| self.find(id)) {
            connector.disconnect();
        }

        self.bump_generation();
        self.transition(Session::disconnected());
        tracing::info!("wallet disconnected");
    }

    /// Restore a session the wallet has already authorized, without prompting.
    ///
    /// Ready connectors are asked in configuration order; the first one with an
    /// authorized account wins. Does nothing unless the session is `Disconnected`.
    pub async fn auto_connect(&self) -> Option<String> {
        if self.session.borrow().state != ConnectionState::Disconnected {
            return None;
        }
        let generation = self.generation.get();

        for connector in self.connectors.iter().filter(|c| c.ready()) {
            let Some(address) = connector.authorized_account().await else {
                continue;
            };

            // The user may have started a connection while we were waiting
            if self.generation.get() != generation
                || self.session.borrow().state != ConnectionState::Disconnected
            {
                return None;
            }

            tracing::info!(connector = %connector.id(), address = %address, "restored wallet session");
            self.transition(Session::connected(address.clone(), connector.id()));
            return Some(address);
        }
        None
    }

    /// Apply a wallet `accountsChanged` event.
    ///
    /// An empty list means the site lost access and ends the session; otherwise
    /// the first account becomes the session address. Ignored unless connected.
    pub fn handle_accounts_changed(&self, accounts: &[String]) {
        let current = self.session();
        if !current.is_connected() {
            return;
        }

        match accounts.first() {
            None => self.disconnect(),
            Some(address) if current.address() != Some(address.as_str()) => {
                let Some(connector) = current.active_connector.clone() else {
                    return;
                };
                tracing::info!(address = %address, "wallet account changed");
                self.transition(Session::connected(address.clone(), connector));
            }
            Some(_) => {}
        }
    }

    fn find(&self, id: &ConnectorId) -> Option<Rc<dyn Connector>> {
        self.connectors.iter().find(|c| &c.id() == id).cloned()
    }

    fn bump_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn transition(&self, next: Session) {
        tracing::debug!(from = ?self.session.borrow().state, to = ?next.state, "session transition");
        *self.session.borrow_mut() = next;

        let snapshot = self.session();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEPOLIA_CHAIN_ID;
    use crate::testing::{sepolia, MockConnector, ALICE, BOB};
    use futures::channel::oneshot;

    fn store_with(connectors: Vec<Rc<MockConnector>>) -> SessionStore {
        let connectors = connectors
            .into_iter()
            .map(|c| c as Rc<dyn Connector>)
            .collect();
        SessionStore::new(sepolia(), connectors)
    }

    fn assert_invariant(session: &Session) {
        assert_eq!(
            session.address().is_some(),
            session.state() == ConnectionState::Connected,
            "address must be set iff connected: {:?}",
            session
        );
    }

    #[test]
    fn test_new_store_is_disconnected() {
        let store = store_with(vec![MockConnector::ready("metaMask")]);
        let session = store.session();

        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert_eq!(session.address(), None);
        assert_eq!(session.active_connector(), None);
    }

    #[test]
    fn test_list_connectors_keeps_order_and_readiness() {
        let store = store_with(vec![
            MockConnector::ready("metaMask"),
            MockConnector::unready("coinbaseWallet"),
        ]);

        let connectors = store.list_connectors();
        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].id.as_str(), "metaMask");
        assert!(connectors[0].ready);
        assert_eq!(connectors[1].id.as_str(), "coinbaseWallet");
        assert!(!connectors[1].ready);
    }

    #[tokio::test]
    async fn test_connect_success() {
        let connector = MockConnector::ready("metaMask");
        connector.push_response(Ok(ALICE.to_string()));
        let store = store_with(vec![connector.clone()]);

        let address = store.connect(&"metaMask".into()).await.unwrap();

        assert_eq!(address, ALICE);
        let session = store.session();
        assert_eq!(session.state(), ConnectionState::Connected);
        assert_eq!(session.address(), Some(ALICE));
        assert_eq!(session.active_connector().map(|c| c.as_str()), Some("metaMask"));
        assert_eq!(connector.requested_chains(), vec![SEPOLIA_CHAIN_ID]);
    }

    #[tokio::test]
    async fn test_connect_failure_returns_to_disconnected() {
        let connector = MockConnector::ready("metaMask");
        connector.push_response(Err(ConnectorError::UserRejected));
        let store = store_with(vec![connector]);

        let err = store.connect(&"metaMask".into()).await.unwrap_err();

        assert_eq!(err, AppError::Connector(ConnectorError::UserRejected));
        assert_eq!(store.session(), Session::disconnected());
    }

    #[tokio::test]
    async fn test_connect_network_mismatch_surfaces_reason() {
        let connector = MockConnector::ready("metaMask");
        connector.push_response(Err(ConnectorError::NetworkMismatch { expected: SEPOLIA_CHAIN_ID, actual: 1 }));
        let store = store_with(vec![connector]);

        let err = store.connect(&"metaMask".into()).await.unwrap_err();

        assert!(matches!(err, AppError::Connector(ConnectorError::NetworkMismatch { actual: 1, .. })));
        assert!(!store.session().is_connected());
    }

    #[tokio::test]
    async fn test_connect_unknown_connector() {
        let store = store_with(vec![MockConnector::ready("metaMask")]);

        let err = store.connect(&"walletConnect".into()).await.unwrap_err();

        assert_eq!(err, AppError::Connector(ConnectorError::UnknownConnector("walletConnect".to_string())));
        assert_eq!(store.session(), Session::disconnected());
    }

    #[tokio::test]
    async fn test_connect_unready_connector_never_prompts() {
        let connector = MockConnector::unready("metaMask");
        let store = store_with(vec![connector.clone()]);

        let err = store.connect(&"metaMask".into()).await.unwrap_err();

        assert!(matches!(err, AppError::Connector(ConnectorError::Unavailable(_))));
        assert_eq!(connector.request_count(), 0);
        assert_eq!(store.session(), Session::disconnected());
    }

    #[tokio::test]
    async fn test_readiness_is_reread_on_every_call() {
        let connector = MockConnector::unready("metaMask");
        connector.push_response(Ok(ALICE.to_string()));
        let store = store_with(vec![connector.clone()]);
        assert!(!store.list_connectors()[0].ready);

        // Extension injected after page load
        connector.set_ready(true);

        assert!(store.list_connectors()[0].ready);
        assert_eq!(store.connect(&"metaMask".into()).await.unwrap(), ALICE);
        assert_eq!(connector.request_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_connect_is_rejected_as_busy() {
        let connector = MockConnector::ready("metaMask");
        let (tx, rx) = oneshot::channel();
        connector.hold_next(rx);
        let store = store_with(vec![connector.clone()]);
        let id: ConnectorId = "metaMask".into();

        let first = store.connect(&id);
        futures::pin_mut!(first);
        assert!(futures::poll!(first.as_mut()).is_pending());

        let session = store.session();
        assert_eq!(session.state(), ConnectionState::Connecting);
        assert!(session.is_connecting_with(&id));
        assert_invariant(&session);

        assert_eq!(store.connect(&id).await, Err(AppError::Busy));
        assert_eq!(store.session().state(), ConnectionState::Connecting);

        tx.send(Ok(ALICE.to_string())).unwrap();
        assert_eq!(first.await.unwrap(), ALICE);
        assert_eq!(store.session().address(), Some(ALICE));
        assert_eq!(connector.request_count(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_during_handshake_discards_result() {
        let connector = MockConnector::ready("metaMask");
        let (tx, rx) = oneshot::channel();
        connector.hold_next(rx);
        let store = store_with(vec![connector]);
        let id: ConnectorId = "metaMask".into();

        let pending = store.connect(&id);
        futures::pin_mut!(pending);
        assert!(futures::poll!(pending.as_mut()).is_pending());

        store.disconnect();
        tx.send(Ok(ALICE.to_string())).unwrap();

        assert!(pending.await.is_err());
        assert_eq!(store.session(), Session::disconnected());
    }

    #[tokio::test]
    async fn test_connect_when_already_connected_reuses_session() {
        let connector = MockConnector::ready("metaMask");
        connector.push_response(Ok(ALICE.to_string()));
        let store = store_with(vec![connector.clone()]);
        let id: ConnectorId = "metaMask".into();

        store.connect(&id).await.unwrap();
        assert_eq!(store.connect(&id).await.unwrap(), ALICE);
        assert_eq!(connector.request_count(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_clears_address() {
        let connector = MockConnector::ready("metaMask");
        connector.push_response(Ok(ALICE.to_string()));
        let store = store_with(vec![connector.clone()]);

        store.connect(&"metaMask".into()).await.unwrap();
        store.disconnect();

        assert_eq!(store.session(), Session::disconnected());
        assert_eq!(connector.disconnect_count(), 1);
    }

    #[tokio::test]
    async fn test_invariant_holds_across_call_sequences() {
        let connector = MockConnector::ready("metaMask");
        let store = store_with(vec![connector.clone()]);
        let id: ConnectorId = "metaMask".into();

        let steps: Vec<Option<std::result::Result<&str, ConnectorError>>> = vec![
            Some(Ok(ALICE)),
            None,
            Some(Err(ConnectorError::UserRejected)),
            Some(Ok(BOB)),
            Some(Ok(ALICE)),
            None,
            None,
            Some(Err(ConnectorError::Other("boom".to_string()))),
        ];

        for step in steps {
            match step {
                Some(response) => {
                    connector.push_response(response.map(str::to_string));
                    let _ = store.connect(&id).await;
                }
                None => store.disconnect(),
            }
            assert_invariant(&store.session());
        }
    }

    #[tokio::test]
    async fn test_listeners_see_every_transition() {
        let connector = MockConnector::ready("metaMask");
        connector.push_response(Ok(ALICE.to_string()));
        let store = store_with(vec![connector]);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(Box::new(move |session| sink.borrow_mut().push(session.state())));

        store.connect(&"metaMask".into()).await.unwrap();
        store.disconnect();

        assert_eq!(
            *seen.borrow(),
            vec![
                ConnectionState::Connecting,
                ConnectionState::Connected,
                ConnectionState::Disconnected
            ]
        );
    }

    #[tokio::test]
    async fn test_auto_connect_restores_authorized_account() {
        let unready = MockConnector::unready("coinbaseWallet");
        unready.set_authorized(Some(BOB));
        let metamask = MockConnector::ready("metaMask");
        metamask.set_authorized(Some(ALICE));
        let store = store_with(vec![unready, metamask.clone()]);

        assert_eq!(store.auto_connect().await.as_deref(), Some(ALICE));
        assert_eq!(store.session().address(), Some(ALICE));
        assert_eq!(metamask.request_count(), 0);
    }

    #[tokio::test]
    async fn test_auto_connect_without_authorization_stays_disconnected() {
        let store = store_with(vec![MockConnector::ready("metaMask")]);

        assert_eq!(store.auto_connect().await, None);
        assert_eq!(store.session(), Session::disconnected());
    }

    #[tokio::test]
    async fn test_accounts_changed_updates_or_disconnects() {
        let connector = MockConnector::ready("metaMask");
        connector.push_response(Ok(ALICE.to_string()));
        let store = store_with(vec![connector]);
        store.connect(&"metaMask".into()).await.unwrap();

        store.handle_accounts_changed(&[BOB.to_string()]);
        assert_eq!(store.session().address(), Some(BOB));
        assert!(store.session().is_connected());

        store.handle_accounts_changed(&[]);
        assert_eq!(store.session(), Session::disconnected());

        // Events while disconnected do not create a session
        store.handle_accounts_changed(&[ALICE.to_string()]);
        assert_eq!(store.session(), Session::disconnected());
    }
}
