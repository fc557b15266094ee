//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate an Ethereum address: `0x` followed by exactly 40 hex digits.
///
/// Checksum casing is not verified; mixed case is accepted as-is.
pub fn validate_eth_address(address: &str, field_name: &str) -> Result<(), String> {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| format!("{} must start with 0x", field_name))?;

    if hex.len() != 40 {
        return Err(format!("{} must have 40 hex digits, got {}", field_name, hex.len()));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("{} contains non-hex characters", field_name));
    }
    Ok(())
}

/// Validate that a value lies within `min..=max`.
pub fn validate_range(value: u64, min: u64, max: u64, field_name: &str) -> Result<(), String> {
    if value < min || value > max {
        Err(format!("{} must be between {} and {}", field_name, min, max))
    } else {
        Ok(())
    }
}
