//! UI Components

pub mod navbar;
pub mod nft_card;

pub use navbar::Navbar;
pub use nft_card::NftCard;
