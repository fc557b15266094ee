//! Injected Ethereum wallet integration via wasm-bindgen
//!
//! Talks EIP-1193 to `window.ethereum` (MetaMask and compatible extensions) and
//! exposes it to the core as a [`Connector`].

use async_trait::async_trait;
use js_sys::Reflect;
use lib_core::connector::{Connector, ConnectorId};
use lib_core::error::ConnectorError;
use wasm_bindgen::prelude::*;

use crate::utils::constants::METAMASK_CONNECTOR_ID;

/// EIP-1193 "User Rejected Request"
const USER_REJECTED_CODE: f64 = 4001.0;

// ============================================================================
// EIP-1193 PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasInjectedProvider() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export function isMetaMask() {
    return hasInjectedProvider() && window.ethereum.isMetaMask === true;
}

export async function requestAccounts(expectedChainHex) {
    const eth = window.ethereum;
    if (!eth) {
        throw { code: 'unavailable', message: 'No injected wallet found' };
    }

    const accounts = await eth.request({ method: 'eth_requestAccounts' });

    let chainId = await eth.request({ method: 'eth_chainId' });
    if (String(chainId).toLowerCase() !== expectedChainHex) {
        try {
            await eth.request({
                method: 'wallet_switchEthereumChain',
                params: [{ chainId: expectedChainHex }],
            });
            chainId = await eth.request({ method: 'eth_chainId' });
        } catch (error) {
            if (error && error.code === 4001) {
                throw error;
            }
            throw { code: 'chain', actual: String(chainId), message: error && error.message };
        }
        if (String(chainId).toLowerCase() !== expectedChainHex) {
            throw { code: 'chain', actual: String(chainId), message: 'Wallet stayed on another network' };
        }
    }

    return accounts && accounts.length > 0 ? accounts[0] : null;
}

export async function authorizedAccounts() {
    if (!window.ethereum) {
        return [];
    }
    try {
        return await window.ethereum.request({ method: 'eth_accounts' });
    } catch (_) {
        return [];
    }
}

export function onAccountsChanged(callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on('accountsChanged', callback);
    }
}
")]
extern "C" {
    /// Whether any EIP-1193 provider is injected
    pub fn hasInjectedProvider() -> bool;

    pub fn isMetaMask() -> bool;

    /// Prompt for accounts and make sure the wallet is on `expected_chain_hex`
    #[wasm_bindgen(catch)]
    pub async fn requestAccounts(expected_chain_hex: &str) -> Result<JsValue, JsValue>;

    /// Accounts already authorized for this origin (no prompt)
    pub async fn authorizedAccounts() -> JsValue;

    /// Subscribe to `accountsChanged`
    pub fn onAccountsChanged(callback: &Closure<dyn FnMut(JsValue)>);
}

// ============================================================================
// CONNECTOR
// ============================================================================

/// Browser-extension wallet connector
#[derive(Clone, Debug, Default)]
pub struct MetaMaskConnector;

impl MetaMaskConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Connector for MetaMaskConnector {
    fn id(&self) -> ConnectorId {
        ConnectorId::new(METAMASK_CONNECTOR_ID)
    }

    fn name(&self) -> String {
        if isMetaMask() {
            "MetaMask".to_string()
        } else {
            "Browser Wallet".to_string()
        }
    }

    fn ready(&self) -> bool {
        hasInjectedProvider()
    }

    async fn request_accounts(&self, expected_chain_id: u64) -> Result<String, ConnectorError> {
        let expected_hex = format!("{:#x}", expected_chain_id);
        log::info!("Requesting wallet accounts on chain {}", expected_hex);

        match requestAccounts(&expected_hex).await {
            Ok(value) => value
                .as_string()
                .ok_or_else(|| ConnectorError::Other("Wallet returned no account".to_string())),
            Err(error) => {
                let error = classify_error(&error, expected_chain_id);
                log::warn!("Wallet connection failed: {}", error);
                Err(error)
            }
        }
    }

    async fn authorized_account(&self) -> Option<String> {
        if !hasInjectedProvider() {
            return None;
        }
        let accounts: Vec<String> = serde_wasm_bindgen::from_value(authorizedAccounts().await)
            .unwrap_or_default();
        accounts.into_iter().next()
    }
}

/// Forward `accountsChanged` events to `handler` for the lifetime of the page.
pub fn subscribe_accounts_changed(mut handler: impl FnMut(Vec<String>) + 'static) {
    if !hasInjectedProvider() {
        return;
    }
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
        let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
        log::debug!("Wallet accounts changed: {:?}", accounts);
        handler(accounts);
    });
    onAccountsChanged(&callback);
    callback.forget();
}

/// Map a thrown EIP-1193 error object to a [`ConnectorError`].
fn classify_error(error: &JsValue, expected_chain_id: u64) -> ConnectorError {
    let code = Reflect::get(error, &JsValue::from_str("code")).unwrap_or(JsValue::UNDEFINED);
    let message = Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("Connection error: {:?}", error));

    if code.as_f64() == Some(USER_REJECTED_CODE) {
        return ConnectorError::UserRejected;
    }

    match code.as_string().as_deref() {
        Some("unavailable") => ConnectorError::Unavailable("Browser wallet".to_string()),
        Some("chain") => {
            let actual = Reflect::get(error, &JsValue::from_str("actual"))
                .ok()
                .and_then(|a| a.as_string())
                .and_then(|hex| parse_chain_id(&hex))
                .unwrap_or(0);
            ConnectorError::NetworkMismatch {
                expected: expected_chain_id,
                actual,
            }
        }
        _ => ConnectorError::Other(message),
    }
}

/// Parse an `eth_chainId` value (`0x`-prefixed hex).
pub fn parse_chain_id(value: &str) -> Option<u64> {
    let hex = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))?;
    u64::from_str_radix(hex, 16).ok()
}
