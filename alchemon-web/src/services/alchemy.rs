//! Alchemy NFT API client
//!
//! Lists the tokens owned by an address over `getNFTs`, following `pageKey`
//! pagination. The whole lookup, all pages included, is bounded by the
//! configured timeout.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use lib_core::config::Config;
use lib_core::error::FetchError;
use lib_core::indexer::{collect_pages, with_deadline, AssetIndexer, AssetRecord};
use shared::dto::nft::OwnedNftsResponse;

#[derive(Clone, Debug)]
pub struct AlchemyIndexer {
    config: Config,
}

impl AlchemyIndexer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    async fn fetch_page(&self, owner: &str, page_key: Option<String>) -> Result<OwnedNftsResponse, FetchError> {
        let url = self.config.nfts_for_owner_url(owner, page_key.as_deref());

        let response = Request::get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(serde_json::from_str::<OwnedNftsResponse>(&body)?)
    }
}

#[async_trait(?Send)]
impl AssetIndexer for AlchemyIndexer {
    async fn owned_assets(&self, owner: &str) -> Result<Vec<AssetRecord>, FetchError> {
        let timeout_ms = self.config.fetch_timeout_ms;
        let deadline = TimeoutFuture::new(u32::try_from(timeout_ms).unwrap_or(u32::MAX));

        let lookup = collect_pages(|page_key| self.fetch_page(owner, page_key));
        let records = with_deadline(lookup, deadline, timeout_ms).await?;
        log::info!("Indexer returned {} tokens for {}", records.len(), owner);
        Ok(records)
    }
}
