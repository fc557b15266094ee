//! # Application Configuration
//!
//! Static description of the target chain and of the NFT indexing endpoint.
//! Configuration is validated on startup to fail fast if misconfigured.
//!
//! Native callers load it from the environment with [`Config::from_env`]; the web
//! front end builds it from compile-time values with [`Config::new`]. The resulting
//! value is owned by the caller and passed by reference; there is no global
//! instance.
//!
//! ```rust
//! use lib_core::config::{Config, SEPOLIA_CHAIN_ID};
//!
//! let config = Config::new("demo");
//! assert_eq!(config.network.chain_id, SEPOLIA_CHAIN_ID);
//! assert_eq!(config.network.chain_id_hex(), "0xaa36a7");
//! assert!(config.validate().is_ok());
//! ```

use lib_utils::{get_env, get_env_or, get_env_parse_or, validate_eth_address, validate_not_empty, validate_range};

use crate::error::{AppError, Result};

/// Sepolia test network
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Alchemon NFT contract on Sepolia
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x21a5550016994d91450e7e83b34d0300d4eccca5";

pub const DEFAULT_NFT_API_BASE: &str = "https://eth-sepolia.g.alchemy.com/nft/v2";

pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Upper bound accepted for `ALCHEMON_FETCH_TIMEOUT_MS`
pub const MAX_FETCH_TIMEOUT_MS: u64 = 60_000;

/// One target chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    /// EIP-155 chain id
    pub chain_id: u64,
    pub name: String,
    /// JSON-RPC endpoint with the access key embedded in the path
    pub rpc_url: String,
}

impl NetworkConfig {
    pub fn sepolia(api_key: &str) -> Self {
        Self {
            chain_id: SEPOLIA_CHAIN_ID,
            name: "Sepolia".to_string(),
            rpc_url: format!("https://eth-sepolia.g.alchemy.com/v2/{}", api_key),
        }
    }

    /// Chain id in the `0x`-prefixed form wallets report (`eth_chainId`).
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub network: NetworkConfig,

    /// Static indexing-service key. Not user supplied, not rotated at runtime.
    pub alchemy_api_key: String,

    /// Base URL of the NFT API, without the key segment
    pub nft_api_base: String,

    /// The single contract whose tokens the dashboard displays
    pub target_contract: String,

    /// Per-request timeout for the asset lookup
    pub fetch_timeout_ms: u64,
}

impl Config {
    /// Sepolia defaults with the given indexing key.
    pub fn new(api_key: &str) -> Self {
        Self {
            network: NetworkConfig::sepolia(api_key),
            alchemy_api_key: api_key.to_string(),
            nft_api_base: DEFAULT_NFT_API_BASE.to_string(),
            target_contract: DEFAULT_CONTRACT_ADDRESS.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }

    /// Load configuration from environment variables (and `.env` when present).
    ///
    /// - `ALCHEMY_API_KEY` (required)
    /// - `ALCHEMON_CONTRACT_ADDRESS` (default [`DEFAULT_CONTRACT_ADDRESS`])
    /// - `ALCHEMON_FETCH_TIMEOUT_MS` (default [`DEFAULT_FETCH_TIMEOUT_MS`])
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = get_env("ALCHEMY_API_KEY")?;
        let mut config = Self::new(&api_key);
        config.target_contract = get_env_or("ALCHEMON_CONTRACT_ADDRESS", DEFAULT_CONTRACT_ADDRESS);
        config.fetch_timeout_ms = get_env_parse_or("ALCHEMON_FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT_MS)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_not_empty(&self.alchemy_api_key, "ALCHEMY_API_KEY").map_err(AppError::Config)?;
        validate_eth_address(&self.target_contract, "ALCHEMON_CONTRACT_ADDRESS").map_err(AppError::Config)?;
        validate_range(self.fetch_timeout_ms, 1, MAX_FETCH_TIMEOUT_MS, "ALCHEMON_FETCH_TIMEOUT_MS")
            .map_err(AppError::Config)?;

        if self.network.chain_id == 0 {
            return Err(AppError::Config("chain id must be non-zero".to_string()));
        }
        Ok(())
    }

    /// URL of the owned-NFT listing for `owner`, optionally continuing at `page_key`.
    pub fn nfts_for_owner_url(&self, owner: &str, page_key: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}/getNFTs?owner={}",
            self.nft_api_base.trim_end_matches('/'),
            self.alchemy_api_key,
            urlencoding::encode(owner)
        );
        if let Some(key) = page_key {
            url.push_str("&pageKey=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }
}
