//! # Data Transfer Objects (DTOs)
//!
//! Data structures returned by the NFT indexing service.
//!
//! ## Module Organization
//!
//! - [`nft`] - Owned-NFT listing (`GET /nft/v2/<key>/getNFTs?owner=<address>`)
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /nft/v2/demo/getNFTs?owner=0x15FCf80d3ee270455d596c93bb37B4f1E1Aa15F7
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "ownedNfts": [
//!     {
//!       "contract": { "address": "0x21a5550016994d91450e7e83b34d0300d4eccca5" },
//!       "id": { "tokenId": "0x01", "tokenMetadata": { "tokenType": "ERC721" } },
//!       "title": "Pyroclaw",
//!       "media": [{ "raw": "ipfs://Qm.../1.png", "gateway": "https://..." }],
//!       "metadata": { "name": "Pyroclaw", "image": "ipfs://Qm.../1.png" }
//!     }
//!   ],
//!   "pageKey": null,
//!   "totalCount": 1
//! }
//! ```

pub mod nft;

pub use nft::*;
