//! Home Page - connected wallet overview

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use lib_core::routing::{Navigator, Route};

use crate::state::wallet::use_wallet_context;
use crate::utils::navigation::RouterNavigator;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let navigator = StoredValue::new_local(RouterNavigator::new(use_navigate()));

    // Guard: without a session there is nothing to show here
    Effect::new(move || {
        if !wallet_ctx.is_connected() {
            navigator.with_value(|n| n.navigate(Route::Connect));
        }
    });

    let on_disconnect = move |_| {
        wallet_ctx.disconnect();
        navigator.with_value(|n| n.navigate(Route::Connect));
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <Show when=move || wallet_ctx.is_connected()>
                <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl);">
                    <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                        "Alchemon"
                    </h1>

                    <div style="background: var(--bg-card); padding: var(--spacing-lg); border-radius: var(--border-radius); border: 1px solid var(--border-color); margin-bottom: var(--spacing-lg);">
                        <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">
                            "Wallet Address"
                        </p>
                        <p style="font-family: monospace; color: var(--text-primary); word-break: break-all; font-size: 0.9em;">
                            {move || wallet_ctx.address()}
                        </p>
                    </div>

                    <A href=Route::Dashboard.path()>
                        <span class="btn" style="width: 100%; display: block; text-align: center; margin-bottom: var(--spacing-md);">
                            "View My Alchemon"
                        </span>
                    </A>

                    <button
                        class="btn"
                        style="width: 100%; background: var(--bg-error);"
                        on:click=on_disconnect
                    >
                        "Disconnect Wallet"
                    </button>
                </div>
            </Show>
        </div>
    }
}
