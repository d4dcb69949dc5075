// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Address validation for user supplied input

use alloy_primitives::Address;
use thiserror::Error;

const ADDRESS_HEX_LENGTH: usize = 40;

/// Reasons an address string is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Not 40 hex digits with an optional `0x` prefix
    #[error("invalid address format: {0}")]
    InvalidFormat(String),

    /// Mixed-case input whose EIP-55 checksum does not match
    #[error("bad address checksum: {0}")]
    BadChecksum(String),
}

/// Parse a user supplied address
///
/// Accepts 40 hex digits with or without a lowercase `0x` prefix. All-lowercase
/// and all-uppercase digits are accepted as is; mixed case is treated as an
/// EIP-55 checksum and must match.
pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);

    if digits.len() != ADDRESS_HEX_LENGTH || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidFormat(input.to_string()));
    }

    let address: Address = digits
        .parse()
        .map_err(|_| AddressError::InvalidFormat(input.to_string()))?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None)[2..] != *digits {
        return Err(AddressError::BadChecksum(input.to_string()));
    }

    Ok(address)
}
