//! Application constants

use lib_core::config::{Config, DEFAULT_CONTRACT_ADDRESS};

/// Indexing key baked in at build time (`ALCHEMY_API_KEY=... trunk build`).
/// Alchemy's rate-limited public key is used when none is given.
pub const ALCHEMY_API_KEY: &str = match option_env!("ALCHEMY_API_KEY") {
    Some(key) => key,
    None => "demo",
};

pub const CONTRACT_ADDRESS: &str = match option_env!("ALCHEMON_CONTRACT_ADDRESS") {
    Some(address) => address,
    None => DEFAULT_CONTRACT_ADDRESS,
};

pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

pub const METAMASK_CONNECTOR_ID: &str = "metaMask";

/// Build-time configuration. Falls back to the defaults if the baked-in
/// values do not validate.
pub fn app_config() -> Config {
    let mut config = Config::new(ALCHEMY_API_KEY);
    config.target_contract = CONTRACT_ADDRESS.to_string();

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("Invalid build configuration ({}), using defaults", e);
            Config::new("demo")
        }
    }
}
