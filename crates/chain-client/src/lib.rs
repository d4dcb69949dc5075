// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only chain access for the contract info API
//!
//! This crate provides the capability interface the HTTP handlers depend on,
//! keeping them independent of any particular node transport.
//!
//! # Core Abstractions
//!
//! - **`ChainReader` Trait**: account queries (`get_code`, `get_balance`,
//!   `get_transaction_count`), raw `eth_call` and a health check
//! - **Call Profiles**: [`abi`] wraps the ERC20 and ERC721 read-only functions
//!   on top of `call_read_only`
//! - **Error Handling**: one [`ChainError`] taxonomy shared by all readers
//! - **Helpers**: [`fetch_or_default`] for per-field degradation, [`units`]
//!   for decimal formatting and [`address`] for input validation

use alloy_primitives::{Address, Bytes, U256};
use thiserror::Error;

pub mod abi;
pub mod address;
pub mod fetch;
pub mod health;
pub mod units;

pub use abi::{Erc20Contract, Erc721Contract, call_contract};
pub use address::{AddressError, parse_address};
pub use fetch::fetch_or_default;
pub use health::HealthStatus;
pub use units::{format_ether, format_units};

/// Read-only access to an Ethereum node
///
/// Every query runs against the latest block. Implementations must be safe to
/// share between concurrently running requests.
pub trait ChainReader: Send + Sync {
    /// Deployed bytecode at `address`, empty for externally owned accounts
    fn get_code(&self, address: Address) -> impl Future<Output = Result<Bytes, ChainError>> + Send;

    /// Balance of `address` in wei
    fn get_balance(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<U256, ChainError>> + Send;

    /// Number of transactions sent from `address`
    fn get_transaction_count(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<u64, ChainError>> + Send;

    /// Execute an `eth_call` against `to` with the given calldata
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Rpc`] when the call reverts, as well as transport
    /// and response errors.
    fn call_read_only(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<Bytes, ChainError>> + Send;

    /// Check that the node answers
    fn health_check(&self) -> impl Future<Output = Result<HealthStatus, ChainError>> + Send;

    /// Short identifier used in logs and health reports
    fn name(&self) -> &'static str;
}

/// Errors produced while reading from the chain
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ChainError {
    /// Transport level failure
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Node answered with a non-success HTTP status
    #[error("node responded with HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Node answered with a JSON-RPC error object, e.g. a reverted call
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response could not be interpreted
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Return data did not match the function's ABI
    #[error("failed to decode return data of {function}: {message}")]
    Decode {
        function: &'static str,
        message: String,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },

    /// Reader misconfiguration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_node_details() {
        let reverted = ChainError::Rpc {
            code: 3,
            message: "execution reverted".to_string(),
        };
        assert_eq!(reverted.to_string(), "JSON-RPC error 3: execution reverted");

        let status = ChainError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(status.to_string(), "node responded with HTTP 502: Bad Gateway");
    }
}
