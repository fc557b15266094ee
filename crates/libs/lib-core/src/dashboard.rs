//! # Dashboard Workflow
//!
//! Session-gated fetch of the connected account's Alchemon tokens.
//!
//! ```text
//! Unmounted ──mount──▶ Unauthenticated            (not connected: redirect to /connect, no fetch)
//!           └─mount──▶ Loading ──load──▶ Ready     (tokens of the target contract)
//!                              └─load──▶ Failed    (visible error, empty list)
//! ```
//!
//! ## Fetch Once Per Mount
//!
//! The owner address is captured at mount time and exactly one lookup is issued
//! for it, however many times the page re-renders or calls [`DashboardWorkflow::load`].
//! If the wallet switches accounts while the dashboard is mounted, the tokens of
//! the previous account stay on screen until the page is mounted again;
//! [`DashboardWorkflow::observe_address`] only marks the list as stale.
//!
//! ## Failures
//!
//! A rejected lookup ends in [`DashboardState::Failed`] with a user-facing
//! message. There is no retry, and the workflow never stays in `Loading` once
//! the lookup has completed.

use std::cell::{Cell, RefCell};

use crate::error::{AppError, FetchError};
use crate::indexer::{filter_by_contract, AssetIndexer, AssetRecord};
use crate::routing::{Navigator, QueryParams, Route};
use crate::session::Session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Unmounted,
    /// No wallet session at mount; redirected to the connect screen
    Unauthenticated,
    Loading { owner: String },
    Ready { owner: String, assets: Vec<AssetRecord> },
    Failed { owner: String, message: String },
}

/// What the page has to do after mounting
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    /// Sent to the connect screen
    Redirected,
    /// Start the lookup for `owner`
    Fetch { owner: String },
    /// `mount` already ran for this activation
    AlreadyMounted,
}

#[derive(Default)]
pub struct DashboardWorkflow {
    state: RefCell<DashboardState>,
    mint_banner: Cell<bool>,
    fetch_issued: Cell<bool>,
    stale: Cell<bool>,
    /// Bumped on every mount and unmount; results of older activations are dropped
    activation: Cell<u64>,
}

impl DashboardWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the session once per activation.
    ///
    /// The mint banner is read from `query` independently of the session outcome.
    pub fn mount(&self, session: &Session, query: &QueryParams, navigator: &dyn Navigator) -> MountOutcome {
        if self.is_mounted() {
            return MountOutcome::AlreadyMounted;
        }

        self.next_activation();
        self.mint_banner.set(query.is_mint_redirect());
        self.fetch_issued.set(false);
        self.stale.set(false);

        match session.address().filter(|_| session.is_connected()) {
            Some(owner) => {
                tracing::debug!(owner = %owner, "dashboard mounted with wallet session");
                self.set_state(DashboardState::Loading { owner: owner.to_string() });
                MountOutcome::Fetch { owner: owner.to_string() }
            }
            None => {
                tracing::debug!("dashboard mounted without wallet session, redirecting");
                self.set_state(DashboardState::Unauthenticated);
                navigator.navigate(Route::Connect);
                MountOutcome::Redirected
            }
        }
    }

    pub fn is_mounted(&self) -> bool {
        *self.state.borrow() != DashboardState::Unmounted
    }

    /// Run the lookup for the owner captured at mount and keep only tokens of
    /// `target_contract`.
    ///
    /// Returns false without contacting the indexer when the workflow is not
    /// loading or the lookup was already issued for this mount.
    pub async fn load(&self, indexer: &dyn AssetIndexer, target_contract: &str) -> bool {
        let owner = match &*self.state.borrow() {
            DashboardState::Loading { owner } if !self.fetch_issued.get() => owner.clone(),
            _ => return false,
        };
        self.fetch_issued.set(true);
        let activation = self.activation.get();

        tracing::info!(owner = %owner, "fetching owned assets");
        let result = indexer.owned_assets(&owner).await;
        self.apply(activation, &owner, result, target_contract);
        true
    }

    /// Store a lookup result. Ignored unless the activation that issued it is
    /// still current and loading for `owner`.
    fn apply(&self, activation: u64, owner: &str, result: Result<Vec<AssetRecord>, FetchError>, target_contract: &str) {
        let loading_for_owner = matches!(
            &*self.state.borrow(),
            DashboardState::Loading { owner: current } if current == owner
        );
        if activation != self.activation.get() || !loading_for_owner {
            tracing::debug!(owner = %owner, "dropping asset result for inactive dashboard");
            return;
        }

        let next = match result {
            Ok(records) => {
                let assets = filter_by_contract(records, target_contract);
                tracing::info!(owner = %owner, count = assets.len(), "owned assets loaded");
                DashboardState::Ready { owner: owner.to_string(), assets }
            }
            Err(err) => {
                tracing::warn!(owner = %owner, error = %err, "owned asset lookup failed");
                DashboardState::Failed {
                    owner: owner.to_string(),
                    message: AppError::from(err).user_message(),
                }
            }
        };
        self.set_state(next);
    }

    /// Note the session address seen on a later render. A different address
    /// marks the displayed list stale; no new lookup is started.
    pub fn observe_address(&self, address: Option<&str>) {
        let owner = match &*self.state.borrow() {
            DashboardState::Loading { owner }
            | DashboardState::Ready { owner, .. }
            | DashboardState::Failed { owner, .. } => owner.clone(),
            _ => return,
        };

        if address != Some(owner.as_str()) && !self.stale.replace(true) {
            tracing::debug!(owner = %owner, current = ?address, "wallet account changed while dashboard mounted");
        }
    }

    /// Follow query changes while mounted (the router can rewrite the query
    /// without remounting the page). Only the mint banner depends on it.
    pub fn observe_query(&self, query: &QueryParams) {
        if self.is_mounted() {
            self.mint_banner.set(query.is_mint_redirect());
        }
    }

    /// Tear down this activation; late lookup results are dropped.
    pub fn unmount(&self) {
        self.next_activation();
        self.set_state(DashboardState::Unmounted);
        self.mint_banner.set(false);
    }

    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Tokens to display (empty unless `Ready`).
    pub fn assets(&self) -> Vec<AssetRecord> {
        match &*self.state.borrow() {
            DashboardState::Ready { assets, .. } => assets.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(&*self.state.borrow(), DashboardState::Loading { .. })
    }

    pub fn error(&self) -> Option<String> {
        match &*self.state.borrow() {
            DashboardState::Failed { message, .. } => Some(message.clone()),
            _ => None,
        }
    }

    /// Show "Success! Check out your new Alchemon below!"
    pub fn mint_banner(&self) -> bool {
        self.mint_banner.get()
    }

    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    fn next_activation(&self) {
        self.activation.set(self.activation.get().wrapping_add(1));
    }

    fn set_state(&self, next: DashboardState) {
        *self.state.borrow_mut() = next;
    }
}
