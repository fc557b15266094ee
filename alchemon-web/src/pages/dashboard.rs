//! Dashboard Page - the connected wallet's Alchemon
//!
//! Evaluates the session once after the first render. Without a session the
//! user is sent to the connect page; otherwise a single lookup runs for the
//! address seen at that moment.

use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use lib_core::config::Config;
use lib_core::dashboard::{DashboardState, DashboardWorkflow, MountOutcome};
use lib_core::routing::Route;
use shared::utils::truncate_address;

use crate::components::NftCard;
use crate::services::alchemy::AlchemyIndexer;
use crate::state::wallet::use_wallet_context;
use crate::utils::navigation::RouterNavigator;
use crate::utils::url::dashboard_query;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let config = expect_context::<Config>();
    let query = use_query_map();
    let navigator = StoredValue::new_local(RouterNavigator::new(use_navigate()));
    let workflow = StoredValue::new_local(Rc::new(DashboardWorkflow::new()));
    let fetch_handle = StoredValue::new(None::<AbortHandle>);

    let view_state = RwSignal::new(DashboardState::Unmounted);
    let mint_banner = RwSignal::new(false);
    let stale = RwSignal::new(false);

    let sync = move || {
        workflow.with_value(|w| {
            view_state.set(w.state());
            mint_banner.set(w.mint_banner());
            stale.set(w.is_stale());
        });
    };

    // Mount: reads the session without tracking it, so this runs once
    Effect::new(move || {
        let session = wallet_ctx.session.get_untracked();
        let workflow = workflow.get_value();
        let outcome = workflow.mount(&session, &query.with_untracked(dashboard_query), &navigator.get_value());
        sync();

        if let MountOutcome::Fetch { owner } = outcome {
            log::info!("Loading Alchemon for {}", owner);
            let indexer = AlchemyIndexer::new(config.clone());
            let target = config.target_contract.clone();

            let (task, handle) = abortable(async move {
                workflow.load(&indexer, &target).await;
            });
            fetch_handle.set_value(Some(handle));

            spawn_local(async move {
                match task.await {
                    Ok(()) => sync(),
                    Err(_) => log::debug!("Dashboard lookup aborted"),
                }
            });
        }
    });

    // The router may rewrite the query in place; only the banner follows it
    Effect::new(move || {
        let params = query.with(dashboard_query);
        workflow.with_value(|w| w.observe_query(&params));
        mint_banner.set(workflow.with_value(|w| w.mint_banner()));
    });

    // A later account switch does not refetch; the list is only marked stale
    Effect::new(move || {
        let address = wallet_ctx.address();
        workflow.with_value(|w| w.observe_address(address.as_deref()));
        stale.set(workflow.with_value(|w| w.is_stale()));
    });

    on_cleanup(move || {
        if let Some(handle) = fetch_handle.try_update_value(|h| h.take()).flatten() {
            handle.abort();
        }
        workflow.try_with_value(|w| w.unmount());
    });

    view! {
        <div class="app-container dashboard">
            <Show when=move || matches!(
                view_state.get(),
                DashboardState::Loading { .. } | DashboardState::Ready { .. } | DashboardState::Failed { .. }
            )>
                <h1 class="card-title">"Dashboard"</h1>

                <Show when=move || mint_banner.get()>
                    <div class="success">
                        <p style="text-align: center; font-weight: bold;">
                            "Success! Check out your new Alchemon below!"
                        </p>
                    </div>
                </Show>

                <p class="wallet-address">
                    {move || wallet_ctx.address().map(|a| truncate_address(&a)).unwrap_or_default()}
                </p>

                <Show when=move || stale.get()>
                    <div class="info">
                        <p style="text-align: center;">
                            "Your wallet account changed. Reload the dashboard to see its Alchemon."
                        </p>
                    </div>
                </Show>

                <h2>"My NFTs"</h2>
                {move || match view_state.get() {
                    DashboardState::Loading { .. } => view! {
                        <p class="info">"Loading your Alchemon..."</p>
                    }.into_any(),
                    DashboardState::Failed { message, .. } => view! {
                        <div class="error">
                            <p style="text-align: center;">{message}</p>
                        </div>
                    }.into_any(),
                    DashboardState::Ready { assets, .. } if assets.is_empty() => view! {
                        <p class="info">"No Alchemon in this wallet yet."</p>
                    }.into_any(),
                    DashboardState::Ready { assets, .. } => view! {
                        <div class="nft-grid">
                            {assets.into_iter().map(|asset| view! { <NftCard asset=asset/> }).collect_view()}
                        </div>
                    }.into_any(),
                    DashboardState::Unmounted | DashboardState::Unauthenticated => ().into_any(),
                }}

                <A href=Route::Home.path()>
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to Main Page"
                    </span>
                </A>
            </Show>
        </div>
    }
}
