//! # Formatting Utilities for the Dashboard
//!
//! Display helpers specific to the web front end.
//! For address formatting, use [`shared::utils::truncate_address`].
//!
//! ## Functions
//!
//! - [`media_src`] - Turn an `ipfs://` media location into a browser-loadable URL
//! - [`format_token_id`] - Token id badge text

use crate::utils::constants::IPFS_GATEWAY;

/// Browser-loadable image URL for a token's media.
///
/// `ipfs://<cid>/<path>` (and the legacy `ipfs://ipfs/<cid>`) are rewritten to the
/// public gateway; other URLs are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use alchemon_web::utils::format::media_src;
///
/// assert_eq!(media_src("ipfs://QmHash/1.png"), "https://ipfs.io/ipfs/QmHash/1.png");
/// assert_eq!(media_src("https://example.com/1.png"), "https://example.com/1.png");
/// ```
pub fn media_src(url: &str) -> String {
    match url.strip_prefix("ipfs://") {
        Some(path) => {
            let path = path.strip_prefix("ipfs/").unwrap_or(path);
            format!("{}{}", IPFS_GATEWAY, path)
        }
        None => url.to_string(),
    }
}

/// Format a token id as `#<id>`
pub fn format_token_id(token_id: &str) -> String {
    format!("#{}", token_id)
}
