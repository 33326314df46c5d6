//! Utility functions for the wallet SDK
//!
//! Address validation and wei/ether conversions.

use crate::shared::constants::ADDRESS_HEX_LENGTH;
use crate::shared::error::WalletError;
use ethers::types::{Address, U256};
use ethers::utils::to_checksum;

/// Validate an account address and parse it.
///
/// Accepts 40 hex digits with an optional `0x` prefix. All-lowercase and
/// all-uppercase forms are accepted as-is; mixed case must match the EIP-55
/// checksum.
pub fn validate_address(address: &str) -> Result<Address, WalletError> {
    let body = address.strip_prefix("0x").unwrap_or(address);

    if body.len() != ADDRESS_HEX_LENGTH {
        return Err(WalletError::invalid_input(format!(
            "Invalid Ethereum address: expected {} hex characters, got {}",
            ADDRESS_HEX_LENGTH,
            body.len()
        )));
    }

    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::invalid_input("Invalid Ethereum address: contains non-hex characters"));
    }

    let parsed: Address = body
        .parse()
        .map_err(|e| WalletError::invalid_input(format!("Invalid Ethereum address: {}", e)))?;

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum(&parsed, None) != format!("0x{}", body) {
        return Err(WalletError::invalid_input("Invalid Ethereum address: bad checksum"));
    }

    Ok(parsed)
}

/// Check whether a string is a well-formed account address
pub fn is_address(address: &str) -> bool {
    validate_address(address).is_ok()
}

/// Parse a base-10 wei amount
pub fn parse_wei(amount: &str) -> Result<U256, WalletError> {
    U256::from_dec_str(amount)
        .map_err(|e| WalletError::invalid_input(format!("Invalid wei amount '{}': {}", amount, e)))
}

/// Parse a decimal ether amount into wei
pub fn parse_ether(amount: &str) -> Result<U256, WalletError> {
    ethers::utils::parse_ether(amount)
        .map_err(|e| WalletError::invalid_input(format!("Invalid ether amount '{}': {}", amount, e)))
}

/// Format a wei amount as ether with full precision
pub fn format_ether(amount: U256) -> String {
    ethers::utils::format_ether(amount)
}
