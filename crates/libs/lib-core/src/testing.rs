//! Test doubles for the wallet, indexing and routing collaborators.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::config::NetworkConfig;
use crate::connector::{Connector, ConnectorId};
use crate::error::{ConnectorError, FetchError};
use crate::indexer::{AssetIndexer, AssetRecord};
use crate::routing::{Navigator, Route};

pub const ALICE: &str = "0x15FCf80d3ee270455d596c93bb37B4f1E1Aa15F7";
pub const BOB: &str = "0x2222222222222222222222222222222222222222";

pub fn sepolia() -> NetworkConfig {
    NetworkConfig::sepolia("test-key")
}

pub fn asset(token_id: &str, contract_address: &str) -> AssetRecord {
    AssetRecord {
        token_id: token_id.to_string(),
        display_name: format!("Alchemon #{}", token_id),
        media_url: Some(format!("ipfs://QmHash/{}.png", token_id)),
        contract_address: contract_address.to_string(),
    }
}

type ConnectorResponse = Result<String, ConnectorError>;

/// Scripted wallet connector.
pub struct MockConnector {
    id: ConnectorId,
    ready: Cell<bool>,
    responses: RefCell<VecDeque<ConnectorResponse>>,
    held: RefCell<Option<oneshot::Receiver<ConnectorResponse>>>,
    authorized: RefCell<Option<String>>,
    requested_chains: RefCell<Vec<u64>>,
    disconnects: Cell<usize>,
}

impl MockConnector {
    pub fn ready(id: &str) -> Rc<Self> {
        Rc::new(Self::build(id, true))
    }

    pub fn unready(id: &str) -> Rc<Self> {
        Rc::new(Self::build(id, false))
    }

    fn build(id: &str, ready: bool) -> Self {
        Self {
            id: ConnectorId::new(id),
            ready: Cell::new(ready),
            responses: RefCell::new(VecDeque::new()),
            held: RefCell::new(None),
            authorized: RefCell::new(None),
            requested_chains: RefCell::new(Vec::new()),
            disconnects: Cell::new(0),
        }
    }

    pub fn push_response(&self, response: ConnectorResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Make the next `request_accounts` wait for `rx` instead of the queue.
    pub fn hold_next(&self, rx: oneshot::Receiver<ConnectorResponse>) {
        *self.held.borrow_mut() = Some(rx);
    }

    pub fn set_authorized(&self, address: Option<&str>) {
        *self.authorized.borrow_mut() = address.map(str::to_string);
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.set(ready);
    }

    pub fn request_count(&self) -> usize {
        self.requested_chains.borrow().len()
    }

    pub fn requested_chains(&self) -> Vec<u64> {
        self.requested_chains.borrow().clone()
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.get()
    }
}

#[async_trait(?Send)]
impl Connector for MockConnector {
    fn id(&self) -> ConnectorId {
        self.id.clone()
    }

    fn name(&self) -> String {
        format!("Mock {}", self.id)
    }

    fn ready(&self) -> bool {
        self.ready.get()
    }

    async fn request_accounts(&self, expected_chain_id: u64) -> Result<String, ConnectorError> {
        self.requested_chains.borrow_mut().push(expected_chain_id);

        let held = self.held.borrow_mut().take();
        if let Some(rx) = held {
            return rx
                .await
                .unwrap_or_else(|_| Err(ConnectorError::Other("handshake dropped".to_string())));
        }

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ConnectorError::Other("no scripted response".to_string())))
    }

    async fn authorized_account(&self) -> Option<String> {
        self.authorized.borrow().clone()
    }

    fn disconnect(&self) {
        self.disconnects.set(self.disconnects.get() + 1);
    }
}

type IndexerResponse = Result<Vec<AssetRecord>, FetchError>;

/// Scripted indexing service recording every owner it was asked about.
#[derive(Default)]
pub struct MockIndexer {
    responses: RefCell<VecDeque<IndexerResponse>>,
    held: RefCell<Option<oneshot::Receiver<IndexerResponse>>>,
    owners: RefCell<Vec<String>>,
}

impl MockIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(response: IndexerResponse) -> Self {
        let indexer = Self::new();
        indexer.push_response(response);
        indexer
    }

    pub fn push_response(&self, response: IndexerResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn hold_next(&self, rx: oneshot::Receiver<IndexerResponse>) {
        *self.held.borrow_mut() = Some(rx);
    }

    pub fn owners(&self) -> Vec<String> {
        self.owners.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.owners.borrow().len()
    }
}

#[async_trait(?Send)]
impl AssetIndexer for MockIndexer {
    async fn owned_assets(&self, owner: &str) -> Result<Vec<AssetRecord>, FetchError> {
        self.owners.borrow_mut().push(owner.to_string());

        let held = self.held.borrow_mut().take();
        if let Some(rx) = held {
            return rx.await.unwrap_or(Err(FetchError::Network("request dropped".to_string())));
        }

        self.responses.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Navigator that records every route it was asked to show.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}
