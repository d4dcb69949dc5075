// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! ERC20 and ERC721 read-only call profiles
//!
//! The interfaces only declare the view functions the API reads. Calls are
//! encoded with `alloy-sol-types`, executed through
//! [`ChainReader::call_read_only`] and decoded against the same definition.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

use crate::{ChainError, ChainReader};

#[allow(missing_docs)]
mod profiles {
    alloy_sol_types::sol! {
        /// View functions of an ERC20 token
        interface IERC20 {
            function name() external view returns (string);
            function symbol() external view returns (string);
            function decimals() external view returns (uint8);
            function totalSupply() external view returns (uint256);
        }

        /// View functions of an ERC721 collection
        interface IERC721 {
            function name() external view returns (string);
            function symbol() external view returns (string);
            function tokenURI(uint256 tokenId) external view returns (string);
            function ownerOf(uint256 tokenId) external view returns (address);
        }
    }
}

pub use profiles::{IERC20, IERC721};

/// Execute a typed contract call and decode its return value
///
/// # Errors
///
/// Propagates reader errors and returns [`ChainError::Decode`] when the
/// returned bytes do not match the function's outputs, which is also what an
/// externally owned account yields since it returns no data.
pub async fn call_contract<R, C>(reader: &R, to: Address, call: C) -> Result<C::Return, ChainError>
where
    R: ChainReader,
    C: SolCall,
{
    let calldata = Bytes::from(call.abi_encode());
    let output = reader.call_read_only(to, calldata).await?;

    C::abi_decode_returns(&output).map_err(|source| ChainError::Decode {
        function: C::SIGNATURE,
        message: source.to_string(),
    })
}

/// ERC20 view functions bound to a token address
#[derive(Debug)]
pub struct Erc20Contract<'a, R> {
    reader: &'a R,
    address: Address,
}

impl<'a, R: ChainReader> Erc20Contract<'a, R> {
    /// Bind the ERC20 profile to `address`
    pub fn new(reader: &'a R, address: Address) -> Self {
        Self { reader, address }
    }

    /// `name()`
    pub async fn name(&self) -> Result<String, ChainError> {
        call_contract(self.reader, self.address, IERC20::nameCall {}).await
    }

    /// `symbol()`
    pub async fn symbol(&self) -> Result<String, ChainError> {
        call_contract(self.reader, self.address, IERC20::symbolCall {}).await
    }

    /// `decimals()`
    pub async fn decimals(&self) -> Result<u8, ChainError> {
        call_contract(self.reader, self.address, IERC20::decimalsCall {}).await
    }

    /// `totalSupply()` in base units
    pub async fn total_supply(&self) -> Result<U256, ChainError> {
        call_contract(self.reader, self.address, IERC20::totalSupplyCall {}).await
    }
}

/// ERC721 view functions bound to a collection address
#[derive(Debug)]
pub struct Erc721Contract<'a, R> {
    reader: &'a R,
    address: Address,
}

impl<'a, R: ChainReader> Erc721Contract<'a, R> {
    /// Bind the ERC721 profile to `address`
    pub fn new(reader: &'a R, address: Address) -> Self {
        Self { reader, address }
    }

    /// `name()`
    pub async fn name(&self) -> Result<String, ChainError> {
        call_contract(self.reader, self.address, IERC721::nameCall {}).await
    }

    /// `symbol()`
    pub async fn symbol(&self) -> Result<String, ChainError> {
        call_contract(self.reader, self.address, IERC721::symbolCall {}).await
    }

    /// `tokenURI(tokenId)`
    pub async fn token_uri(&self, token_id: U256) -> Result<String, ChainError> {
        call_contract(
            self.reader,
            self.address,
            IERC721::tokenURICall { tokenId: token_id },
        )
        .await
    }

    /// `ownerOf(tokenId)`
    pub async fn owner_of(&self, token_id: U256) -> Result<Address, ChainError> {
        call_contract(
            self.reader,
            self.address,
            IERC721::ownerOfCall { tokenId: token_id },
        )
        .await
    }
}
