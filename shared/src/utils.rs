//! # Shared Utility Functions
//!
//! Common utility functions used by the core library and the web front end.
//!
//! ## Address Formatting
//!
//! Functions for formatting Ethereum addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the usual `0x1234...abcd` shape
//!
//! ## Address Comparison
//!
//! Hex addresses come back from wallets and indexers in mixed (EIP-55 checksum)
//! case. [`normalize_address`] lowercases them and [`addresses_match`] compares two
//! addresses after normalization.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{addresses_match, format_address};
//!
//! let address = "0x15FCf80d3ee270455d596c93bb37B4f1E1Aa15F7";
//! assert_eq!(format_address(address, 6, 4), "0x15FC...15F7");
//! assert!(addresses_match(address, "0x15fcf80d3ee270455d596c93bb37b4f1e1aa15f7"));
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x21a5550016994d91450e7e83b34d0300d4eccca5";
/// assert_eq!(format_address(addr, 6, 4), "0x21a5...cca5");
/// assert_eq!(format_address("0x1111", 6, 4), "0x1111");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x1234...abcd` (6-character prefix including `0x`, 4-character suffix).
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Lowercase, whitespace-trimmed form of an address.
pub fn normalize_address(address: &str) -> String {
    address.trim().to_lowercase()
}

/// Case-insensitive exact comparison of two addresses.
pub fn addresses_match(a: &str, b: &str) -> bool {
    normalize_address(a) == normalize_address(b)
}
