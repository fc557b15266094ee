//! Single token tile on the dashboard

use leptos::prelude::*;
use lib_core::indexer::AssetRecord;

use crate::utils::format::{format_token_id, media_src};

#[component]
pub fn NftCard(asset: AssetRecord) -> impl IntoView {
    let image = asset.media_url.as_deref().map(media_src);
    let alt = asset.display_name.clone();

    view! {
        <div class="nft-card">
            {match image {
                Some(src) => view! { <img class="nft-image" src=src alt=alt/> }.into_any(),
                None => view! { <div class="nft-image nft-image-missing">"No image"</div> }.into_any(),
            }}
            <div class="nft-info">
                <p class="nft-name">{asset.display_name}</p>
                <p class="nft-id">{format_token_id(&asset.token_id)}</p>
            </div>
        </div>
    }
}
