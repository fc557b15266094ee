//! # Asset Indexing
//!
//! Contract of the external NFT indexing service and the contract-address filter
//! applied to its results.
//!
//! The service is asked for every token owned by an address; the dashboard keeps
//! only tokens of the configured target contract:
//!
//! ```rust
//! use lib_core::indexer::{filter_by_contract, AssetRecord};
//!
//! let record = |id: &str, contract: &str| AssetRecord {
//!     token_id: id.to_string(),
//!     display_name: format!("#{}", id),
//!     media_url: None,
//!     contract_address: contract.to_string(),
//! };
//!
//! let owned = vec![record("1", "0xABC"), record("2", "0xabc"), record("3", "0xDEF")];
//! let kept = filter_by_contract(owned, "0xAbC");
//! assert_eq!(kept.iter().map(|r| r.token_id.as_str()).collect::<Vec<_>>(), ["1", "2"]);
//! ```

use std::future::Future;

use async_trait::async_trait;
use futures::future::{self, Either};
use serde::{Deserialize, Serialize};
use shared::dto::nft::{OwnedNft, OwnedNftsResponse};
use shared::utils::{addresses_match, normalize_address};

use crate::error::FetchError;

/// Upper bound on pages followed for one owner
pub const MAX_PAGES: usize = 20;

/// One token as displayed on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub token_id: String,
    pub display_name: String,
    pub media_url: Option<String>,
    pub contract_address: String,
}

impl From<&OwnedNft> for AssetRecord {
    fn from(nft: &OwnedNft) -> Self {
        Self {
            token_id: nft.token_id(),
            display_name: nft.display_name(),
            media_url: nft.media_url(),
            contract_address: nft.contract.address.clone(),
        }
    }
}

/// External NFT indexing service.
#[async_trait(?Send)]
pub trait AssetIndexer {
    /// Every asset owned by `owner`, across all contracts.
    async fn owned_assets(&self, owner: &str) -> Result<Vec<AssetRecord>, FetchError>;
}

/// Keep only records of `target_contract`, compared case-insensitively.
///
/// Everything else is dropped silently. Input order is preserved.
pub fn filter_by_contract(records: Vec<AssetRecord>, target_contract: &str) -> Vec<AssetRecord> {
    let target = normalize_address(target_contract);
    let total = records.len();

    let kept: Vec<AssetRecord> = records
        .into_iter()
        .filter(|record| addresses_match(&record.contract_address, &target))
        .collect();

    tracing::debug!(total, kept = kept.len(), target = %target, "filtered owned assets by contract");
    kept
}

pub fn records_from_response(response: &OwnedNftsResponse) -> Vec<AssetRecord> {
    response.owned_nfts.iter().map(AssetRecord::from).collect()
}

/// Follow `pageKey` pagination until the service reports no further page.
///
/// `fetch_page` receives the page key to continue from (`None` for the first
/// page). Stops after [`MAX_PAGES`] pages.
pub async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<AssetRecord>, FetchError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<OwnedNftsResponse, FetchError>>,
{
    let mut records = Vec::new();
    let mut page_key = None;

    for _ in 0..MAX_PAGES {
        let page = fetch_page(page_key.take()).await?;
        records.extend(records_from_response(&page));

        match page.page_key {
            Some(key) if !key.is_empty() => page_key = Some(key),
            _ => return Ok(records),
        }
    }

    tracing::warn!(pages = MAX_PAGES, records = records.len(), "page limit reached, result truncated");
    Ok(records)
}

/// Bound a whole lookup by `deadline`, a timer that completes after
/// `timeout_ms`. The lookup is dropped when the timer wins.
pub async fn with_deadline<T, L, D>(lookup: L, deadline: D, timeout_ms: u64) -> Result<T, FetchError>
where
    L: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(lookup);
    futures::pin_mut!(deadline);

    match future::select(lookup, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            tracing::warn!(timeout_ms, "asset lookup timed out");
            Err(FetchError::Timeout(timeout_ms))
        }
    }
}
