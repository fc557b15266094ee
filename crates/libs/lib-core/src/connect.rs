//! # Connect Screen
//!
//! View model behind the wallet connection page: lists connectors, starts a
//! connection on selection, keeps the last failure as display text, and
//! redirects to the main screen once a session exists.
//!
//! Nothing is rendered before [`ConnectScreen::mount`] has run; the page calls it
//! after its first render pass so wallet-dependent UI is never derived from
//! state observed before the client took over.

use std::cell::{Cell, RefCell};

use crate::connector::{ConnectorDescriptor, ConnectorId};
use crate::error::{AppError, Result};
use crate::routing::{Navigator, Route};
use crate::session::{Session, SessionStore};

/// One selectable wallet on the connect page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorEntry {
    pub id: ConnectorId,
    pub label: String,
    /// Connector not ready; the button is shown but cannot be clicked
    pub disabled: bool,
    /// A handshake through this connector is in flight
    pub pending: bool,
}

#[derive(Default)]
pub struct ConnectScreen {
    mounted: Cell<bool>,
    redirected: Cell<bool>,
    connectors: RefCell<Vec<ConnectorDescriptor>>,
    error: RefCell<Option<String>>,
}

impl ConnectScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// First observation pass. Snapshots the connector list and redirects
    /// immediately when a session already exists. Repeated calls are no-ops.
    pub fn mount(&self, store: &SessionStore, navigator: &dyn Navigator) {
        if self.mounted.replace(true) {
            return;
        }
        *self.connectors.borrow_mut() = store.list_connectors();
        tracing::debug!(connectors = self.connectors.borrow().len(), "connect screen mounted");

        self.observe(&store.session(), navigator);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Buttons to render for the given session. Empty before mount.
    pub fn entries(&self, session: &Session) -> Vec<ConnectorEntry> {
        if !self.is_mounted() {
            return Vec::new();
        }

        self.connectors
            .borrow()
            .iter()
            .map(|descriptor| {
                let pending = session.is_connecting_with(&descriptor.id);
                let mut label = format!("Connect {}", descriptor.name);
                if !descriptor.ready {
                    label.push_str(" (unsupported)");
                }
                if pending {
                    label.push_str(" (connecting)");
                }

                ConnectorEntry {
                    id: descriptor.id.clone(),
                    label,
                    disabled: !descriptor.ready,
                    pending,
                }
            })
            .collect()
    }

    /// Connect through `id`. A failure is kept as display text and returned.
    ///
    /// Fails with [`AppError::Internal`] before [`mount`](Self::mount); the
    /// store is not touched then.
    pub async fn select(&self, store: &SessionStore, id: &ConnectorId, navigator: &dyn Navigator) -> Result<()> {
        if !self.is_mounted() {
            tracing::warn!(connector = %id, "connector selected before the connect screen was mounted");
            return Err(AppError::Internal("connect screen not mounted".to_string()));
        }
        self.error.borrow_mut().take();

        match store.connect(id).await {
            Ok(_) => {
                self.observe(&store.session(), navigator);
                Ok(())
            }
            Err(err) => {
                *self.error.borrow_mut() = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// React to a session change: redirect to the main screen on the first
    /// observation of a connected session. Returns true if it navigated.
    pub fn observe(&self, session: &Session, navigator: &dyn Navigator) -> bool {
        if !self.is_mounted() || !session.is_connected() || self.redirected.get() {
            return false;
        }
        self.redirected.set(true);
        navigator.navigate(Route::Home);
        true
    }

    /// Last connection failure, shown under the buttons.
    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}
