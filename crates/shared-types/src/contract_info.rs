// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Contract, token and NFT info payloads
//!
//! Field names are serialized in camelCase to keep the wire format stable for
//! existing consumers of the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentinel reported for a field whose contract call failed
pub const NOT_AVAILABLE: &str = "N/A";

/// Decimals assumed for a token whose `decimals()` call failed
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Account level information for any address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    /// Address exactly as requested
    #[schema(example = "0x000000000000000000000000000000000000dEaD")]
    pub address: String,
    /// Whether the address holds deployed bytecode
    pub is_contract: bool,
    /// Balance in ether, as a decimal string
    #[schema(example = "0.5")]
    pub balance: String,
    /// Account nonce, as a decimal string
    #[schema(example = "42")]
    pub transaction_count: String,
    /// Size of the deployed bytecode in bytes
    pub bytecode_size: usize,
}

/// ERC721 collection and token information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NftInfo {
    /// Address exactly as requested
    pub address: String,
    /// Collection name or `N/A`
    pub name: String,
    /// Collection symbol or `N/A`
    pub symbol: String,
    /// Queried token id, as a decimal string
    #[schema(example = "0")]
    pub token_id: String,
    /// Token metadata URI or `N/A`
    pub token_uri: String,
    /// Checksummed owner address or `N/A`
    pub owner: String,
}

/// ERC20 token information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Address exactly as requested
    pub address: String,
    /// Token name or `N/A`
    pub name: String,
    /// Token symbol or `N/A`
    pub symbol: String,
    /// Token decimals, 18 when unavailable
    #[schema(example = 18)]
    pub decimals: u8,
    /// Total supply formatted with `decimals`, or `N/A`
    #[schema(example = "1000000.0")]
    pub total_supply: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn basic_info_uses_camel_case() {
        let info = BasicInfo {
            address: "0x000000000000000000000000000000000000dEaD".to_string(),
            is_contract: false,
            balance: "0.0".to_string(),
            transaction_count: "0".to_string(),
            bytecode_size: 0,
        };

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "address": "0x000000000000000000000000000000000000dEaD",
                "isContract": false,
                "balance": "0.0",
                "transactionCount": "0",
                "bytecodeSize": 0
            })
        );
    }

    #[test]
    fn nft_info_field_names() {
        let info = NftInfo {
            address: "0xabc".to_string(),
            name: NOT_AVAILABLE.to_string(),
            symbol: NOT_AVAILABLE.to_string(),
            token_id: "7".to_string(),
            token_uri: NOT_AVAILABLE.to_string(),
            owner: NOT_AVAILABLE.to_string(),
        };
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["tokenId"], "7");
        assert_eq!(value["tokenUri"], "N/A");
        assert_eq!(value["owner"], "N/A");
    }

    #[test]
    fn token_info_decimals_is_numeric() {
        let info = TokenInfo {
            address: "0xabc".to_string(),
            name: "Tether USD".to_string(),
            symbol: "USDT".to_string(),
            decimals: 6,
            total_supply: "1000.0".to_string(),
        };
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["decimals"], 6);
        assert_eq!(value["totalSupply"], "1000.0");
    }
}
