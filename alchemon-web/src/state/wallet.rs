//! Wallet state management

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::config::Config;
use lib_core::connector::Connector;
use lib_core::session::{Session, SessionStore};

use crate::services::wallet::MetaMaskConnector;

/// Global wallet context
///
/// The store lives in local (non-`Send`) storage; `session` mirrors every
/// transition so components can react to it.
#[derive(Clone, Copy)]
pub struct WalletContext {
    store: StoredValue<Rc<SessionStore>, LocalStorage>,
    pub session: RwSignal<Session>,
}

impl WalletContext {
    pub fn new(store: Rc<SessionStore>) -> Self {
        let session = RwSignal::new(store.session());
        store.subscribe(Box::new(move |next: &Session| session.set(next.clone())));

        Self {
            store: StoredValue::new_local(store),
            session,
        }
    }

    pub fn store(&self) -> Rc<SessionStore> {
        self.store.get_value()
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|s| s.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.session.with(|s| s.address().map(|a| a.to_string()))
    }

    pub fn disconnect(&self) {
        self.store.with_value(|store| store.disconnect());
    }
}

pub fn provide_wallet_context(config: &Config) -> WalletContext {
    let connectors: Vec<Rc<dyn Connector>> = vec![Rc::new(MetaMaskConnector::new())];
    let store = Rc::new(SessionStore::new(config.network.clone(), connectors));

    let context = WalletContext::new(store);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
