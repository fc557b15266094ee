//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard and the NFT indexing API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::nft`]**: `getNFTs` response (owned tokens, contract, media, metadata)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!   - **[`utils::addresses_match`]**: Case-insensitive address equality
//!
//! ## Wire Format
//!
//! The indexing API speaks **camelCase** JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. Fields the API may omit are defaulted
//! rather than rejected; a token with no media still deserializes.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::nft::OwnedNftsResponse;
//! use shared::utils::addresses_match;
//!
//! let body = r#"{"ownedNfts":[{"contract":{"address":"0xABC"},"id":{"tokenId":"0x1"}}]}"#;
//! let response: OwnedNftsResponse = serde_json::from_str(body).unwrap();
//! assert!(addresses_match(&response.owned_nfts[0].contract.address, "0xabc"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
