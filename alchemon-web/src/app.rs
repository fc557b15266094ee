//! Alchemon Web App - Leptos Frontend

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{ConnectPage, DashboardPage, HomePage};
use crate::services::wallet::subscribe_accounts_changed;
use crate::state::wallet::provide_wallet_context;
use crate::utils::constants::app_config;

#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    let wallet_ctx = provide_wallet_context(&config);
    provide_context(config);

    let (restored, set_restored) = signal(false);

    // Pages are only routed once a previously authorized wallet has been
    // restored, so guards never see the transient disconnected state.
    spawn_local(async move {
        let store = wallet_ctx.store();
        if let Some(address) = store.auto_connect().await {
            log::info!("Restored wallet session for {}", address);
        }
        set_restored.set(true);
    });

    let store = wallet_ctx.store();
    subscribe_accounts_changed(move |accounts| store.handle_accounts_changed(&accounts));

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Show
                    when=move || restored.get()
                    fallback=|| view! { <p class="info" style="text-align: center;">"Loading wallet..."</p> }
                >
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/connect") view=ConnectPage/>
                        <Route path=path!("/dashboard") view=DashboardPage/>
                    </Routes>
                </Show>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
