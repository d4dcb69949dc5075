// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Contract info assembly
//!
//! Builds the basic, NFT and token payloads from a [`ChainReader`]. Account
//! queries are mandatory, while every contract call degrades to a fallback
//! value on its own so that a partially compliant contract still yields a
//! response.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use chain_client::{
    ChainError, ChainReader, Erc20Contract, Erc721Contract, fetch_or_default, format_ether,
    format_units,
};
use shared_types::{BasicInfo, DEFAULT_TOKEN_DECIMALS, NOT_AVAILABLE, NftInfo, TokenInfo};

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Account information for `address`
///
/// `requested` is echoed back verbatim as the payload's address.
///
/// # Errors
///
/// Fails if any of the code, balance or nonce queries fails.
pub async fn basic_info<R: ChainReader>(
    reader: &R,
    requested: &str,
    address: Address,
) -> Result<BasicInfo, ChainError> {
    let code = reader.get_code(address).await?;
    let balance = reader.get_balance(address).await?;
    let transaction_count = reader.get_transaction_count(address).await?;

    Ok(BasicInfo {
        address: requested.to_string(),
        is_contract: !code.is_empty(),
        balance: format_ether(balance),
        transaction_count: transaction_count.to_string(),
        bytecode_size: code.len(),
    })
}

/// Numeric value of a requested token id
///
/// Accepts decimal or `0x` prefixed hex. `None` means the id cannot be passed
/// to a contract call.
pub fn parse_token_id(raw: &str) -> Option<U256> {
    U256::from_str(raw).ok()
}

/// ERC721 collection information and the state of `token_id`
///
/// `token_id` is echoed back as requested. When it does not parse, the token
/// specific fields are reported as `N/A` without calling the contract.
pub async fn nft_info<R: ChainReader>(
    reader: &R,
    requested: &str,
    address: Address,
    token_id: &str,
) -> NftInfo {
    let collection = Erc721Contract::new(reader, address);
    let parsed = parse_token_id(token_id);

    let token_uri = async {
        match parsed {
            Some(id) => fetch_or_default(collection.token_uri(id), not_available()).await,
            None => not_available(),
        }
    };

    let (name, symbol, token_uri) = tokio::join!(
        fetch_or_default(collection.name(), not_available()),
        fetch_or_default(collection.symbol(), not_available()),
        token_uri,
    );

    let owner = match parsed {
        Some(id) => {
            fetch_or_default(
                async {
                    let owner = collection.owner_of(id).await?;
                    Ok::<_, ChainError>(owner.to_checksum(None))
                },
                not_available(),
            )
            .await
        }
        None => not_available(),
    };

    NftInfo {
        address: requested.to_string(),
        name,
        symbol,
        token_id: token_id.to_string(),
        token_uri,
        owner,
    }
}

/// ERC20 token information
pub async fn token_info<R: ChainReader>(reader: &R, requested: &str, address: Address) -> TokenInfo {
    let token = Erc20Contract::new(reader, address);

    let (name, symbol, decimals, total_supply) = tokio::join!(
        fetch_or_default(token.name(), not_available()),
        fetch_or_default(token.symbol(), not_available()),
        fetch_or_default(token.decimals(), DEFAULT_TOKEN_DECIMALS),
        fetch_or_default(async { token.total_supply().await.map(Some) }, None),
    );

    TokenInfo {
        address: requested.to_string(),
        name,
        symbol,
        decimals,
        total_supply: total_supply.map_or_else(not_available, |supply| format_units(supply, decimals)),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use alloy_primitives::Bytes;
    use alloy_sol_types::{SolCall, SolValue};
    use chain_client::{
        HealthStatus,
        abi::{IERC20, IERC721},
    };

    use super::*;

    /// Scripted node: fixed account state, `eth_call` answered by selector
    #[derive(Debug, Default)]
    struct FakeReader {
        code: Bytes,
        balance: U256,
        nonce: u64,
        fail_accounts: bool,
        outputs: HashMap<[u8; 4], Bytes>,
        calls: Mutex<Vec<Bytes>>,
    }

    impl FakeReader {
        fn returning<C: SolCall>(mut self, output: Vec<u8>) -> Self {
            self.outputs.insert(C::SELECTOR, Bytes::from(output));
            self
        }
    }

    fn reverted() -> ChainError {
        ChainError::Rpc {
            code: 3,
            message: "execution reverted".to_string(),
        }
    }

    impl ChainReader for FakeReader {
        async fn get_code(&self, _address: Address) -> Result<Bytes, ChainError> {
            if self.fail_accounts {
                return Err(ChainError::Http {
                    message: "connection refused".to_string(),
                });
            }
            Ok(self.code.clone())
        }

        async fn get_balance(&self, _address: Address) -> Result<U256, ChainError> {
            Ok(self.balance)
        }

        async fn get_transaction_count(&self, _address: Address) -> Result<u64, ChainError> {
            Ok(self.nonce)
        }

        async fn call_read_only(&self, _to: Address, data: Bytes) -> Result<Bytes, ChainError> {
            self.calls.lock().unwrap().push(data.clone());
            let selector: [u8; 4] = data[..4].try_into().unwrap();
            self.outputs.get(&selector).cloned().ok_or_else(reverted)
        }

        async fn health_check(&self) -> Result<HealthStatus, ChainError> {
            Ok(HealthStatus::Up)
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    const CONTRACT: Address = Address::repeat_byte(0x42);
    const REQUESTED: &str = "0x4242424242424242424242424242424242424242";

    #[tokio::test]
    async fn basic_info_for_contract() {
        let reader = FakeReader {
            code: Bytes::from(vec![0x60, 0x80, 0x60, 0x40]),
            balance: U256::from(1_500_000_000_000_000_000u64),
            nonce: 7,
            ..FakeReader::default()
        };

        let info = basic_info(&reader, REQUESTED, CONTRACT).await.unwrap();

        assert_eq!(info.address, REQUESTED);
        assert!(info.is_contract);
        assert_eq!(info.bytecode_size, 4);
        assert_eq!(info.balance, "1.5");
        assert_eq!(info.transaction_count, "7");
    }

    #[tokio::test]
    async fn basic_info_for_externally_owned_account() {
        let reader = FakeReader::default();

        let info = basic_info(&reader, REQUESTED, CONTRACT).await.unwrap();

        assert!(!info.is_contract);
        assert_eq!(info.bytecode_size, 0);
        assert_eq!(info.balance, "0.0");
        assert_eq!(info.transaction_count, "0");
    }

    #[tokio::test]
    async fn basic_info_propagates_account_errors() {
        let reader = FakeReader {
            fail_accounts: true,
            ..FakeReader::default()
        };

        let error = basic_info(&reader, REQUESTED, CONTRACT).await.unwrap_err();
        assert_eq!(error.to_string(), "HTTP request failed: connection refused");
    }

    #[tokio::test]
    async fn nft_info_with_reverting_owner() {
        let reader = FakeReader::default()
            .returning::<IERC721::nameCall>("Bored Ape Yacht Club".to_string().abi_encode())
            .returning::<IERC721::symbolCall>("BAYC".to_string().abi_encode())
            .returning::<IERC721::tokenURICall>("ipfs://bayc/5".to_string().abi_encode());

        let info = nft_info(&reader, REQUESTED, CONTRACT, "5").await;

        assert_eq!(info.name, "Bored Ape Yacht Club");
        assert_eq!(info.symbol, "BAYC");
        assert_eq!(info.token_uri, "ipfs://bayc/5");
        assert_eq!(info.token_id, "5");
        assert_eq!(info.owner, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn nft_info_owner_is_checksummed() {
        let owner: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
        let reader = FakeReader::default().returning::<IERC721::ownerOfCall>(owner.abi_encode());

        let info = nft_info(&reader, REQUESTED, CONTRACT, "0").await;

        assert_eq!(info.owner, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(info.name, NOT_AVAILABLE);
        assert_eq!(info.token_uri, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn nft_info_passes_token_id_to_calls() {
        let reader = FakeReader::default();

        let info = nft_info(&reader, REQUESTED, CONTRACT, "0x1e240").await;

        assert_eq!(info.token_id, "0x1e240");
        let calls = reader.calls.lock().unwrap();
        let owner_call = calls
            .iter()
            .find(|data| data[..4] == IERC721::ownerOfCall::SELECTOR)
            .unwrap();
        let decoded = IERC721::ownerOfCall::abi_decode(owner_call).unwrap();
        assert_eq!(decoded.tokenId, U256::from(123_456u64));
        assert_eq!(calls.len(), 4);
    }

    #[tokio::test]
    async fn nft_info_with_unparseable_token_id() {
        let reader = FakeReader::default()
            .returning::<IERC721::nameCall>("CryptoKitties".to_string().abi_encode())
            .returning::<IERC721::symbolCall>("CK".to_string().abi_encode())
            .returning::<IERC721::tokenURICall>("ipfs://ck/1".to_string().abi_encode())
            .returning::<IERC721::ownerOfCall>(Address::repeat_byte(0x11).abi_encode());

        let info = nft_info(&reader, REQUESTED, CONTRACT, "abc").await;

        assert_eq!(info.name, "CryptoKitties");
        assert_eq!(info.symbol, "CK");
        assert_eq!(info.token_id, "abc");
        assert_eq!(info.token_uri, NOT_AVAILABLE);
        assert_eq!(info.owner, NOT_AVAILABLE);

        let calls = reader.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn token_id_parsing() {
        assert_eq!(parse_token_id("42"), Some(U256::from(42)));
        assert_eq!(parse_token_id("0x2a"), Some(U256::from(42)));
        assert_eq!(
            parse_token_id(
                "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            ),
            Some(U256::MAX)
        );

        for invalid in ["abc", "-1", "1.5", "0xzz"] {
            assert_eq!(parse_token_id(invalid), None, "{invalid} should not parse");
        }
    }

    #[tokio::test]
    async fn token_info_complete() {
        let reader = FakeReader::default()
            .returning::<IERC20::nameCall>("USD Coin".to_string().abi_encode())
            .returning::<IERC20::symbolCall>("USDC".to_string().abi_encode())
            .returning::<IERC20::decimalsCall>(<alloy_sol_types::sol_data::Uint<8> as alloy_sol_types::SolType>::abi_encode(&6u8))
            .returning::<IERC20::totalSupplyCall>(U256::from(25_000_000_500_000u64).abi_encode());

        let info = token_info(&reader, REQUESTED, CONTRACT).await;

        assert_eq!(info.name, "USD Coin");
        assert_eq!(info.symbol, "USDC");
        assert_eq!(info.decimals, 6);
        assert_eq!(info.total_supply, "25000000.5");
    }

    #[tokio::test]
    async fn token_info_defaults_decimals() {
        let reader = FakeReader::default().returning::<IERC20::totalSupplyCall>(
            U256::from(2_000_000_000_000_000_000u64).abi_encode(),
        );

        let info = token_info(&reader, REQUESTED, CONTRACT).await;

        assert_eq!(info.decimals, DEFAULT_TOKEN_DECIMALS);
        assert_eq!(info.total_supply, "2.0");
        assert_eq!(info.name, NOT_AVAILABLE);
        assert_eq!(info.symbol, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn token_info_without_supply() {
        let reader = FakeReader::default()
            .returning::<IERC20::decimalsCall>(<alloy_sol_types::sol_data::Uint<8> as alloy_sol_types::SolType>::abi_encode(&8u8));

        let info = token_info(&reader, REQUESTED, CONTRACT).await;

        assert_eq!(info.decimals, 8);
        assert_eq!(info.total_supply, NOT_AVAILABLE);
    }
}
