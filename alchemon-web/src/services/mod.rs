//! Browser-side services

pub mod alchemy;
pub mod wallet;
