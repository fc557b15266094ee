//! Connect Wallet Page - lists the available wallets and starts a session

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use lib_core::connect::ConnectScreen;
use lib_core::connector::ConnectorId;

use crate::state::wallet::use_wallet_context;
use crate::utils::navigation::RouterNavigator;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let navigator = StoredValue::new_local(RouterNavigator::new(use_navigate()));
    let screen = StoredValue::new_local(Rc::new(ConnectScreen::new()));

    let (mounted, set_mounted) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Effects run after the first render, so nothing wallet-dependent is
    // shown until the client has taken over.
    Effect::new(move || {
        let session = wallet_ctx.session.get();
        let screen = screen.get_value();
        let navigator = navigator.get_value();

        if screen.is_mounted() {
            screen.observe(&session, &navigator);
        } else {
            screen.mount(&wallet_ctx.store(), &navigator);
            set_mounted.set(true);
        }
    });

    let on_select = move |id: ConnectorId| {
        let screen = screen.get_value();
        let store = wallet_ctx.store();
        let navigator = navigator.get_value();
        set_error.set(None);

        spawn_local(async move {
            if let Err(e) = screen.select(&store, &id, &navigator).await {
                log::warn!("Wallet connection via {} failed: {}", id, e);
                set_error.set(screen.error());
            }
        });
    };

    let entries = move || {
        if !mounted.get() {
            return Vec::new();
        }
        wallet_ctx
            .session
            .with(|session| screen.with_value(|screen| screen.entries(session)))
    };

    view! {
        <div class="content-wrapper">
            <div class="left-section">
                <h1 class="main-header">"Alchemon"</h1>
                <p class="main-subheader">"Collect creatures on Sepolia"</p>
                <p class="signup-text">"connect a wallet to see your Alchemon"</p>
            </div>
            <div class="right-section">
                <div class="container">
                    <div class="card">
                        <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                            "Connect Wallet"
                        </h1>

                        <Show when=move || mounted.get()>
                            <p class="subtitle">"Select a wallet to connect"</p>

                            <div style="display: flex; flex-direction: column; gap: 12px;">
                                {move || entries().into_iter().map(|entry| {
                                    let id = entry.id.clone();
                                    view! {
                                        <button
                                            class="btn"
                                            class:btn-pending=entry.pending
                                            disabled=entry.disabled
                                            on:click=move |_| on_select(id.clone())
                                        >
                                            {entry.label}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>

                            {move || error.get().map(|err| view! {
                                <div class="error">
                                    <p style="text-align: center;">{err}</p>
                                </div>
                            })}
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
