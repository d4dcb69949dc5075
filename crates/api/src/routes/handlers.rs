// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! This module provides the health check and the three contract info
//! handlers. Each contract info handler validates its input, delegates to
//! [`crate::contracts`] and narrates the request in the request log.

use std::time::Instant;

use alloy_primitives::Address;
use axum::{Json, extract::State, http::StatusCode};
use chain_client::parse_address;
use serde::Serialize;
use shared_types::{ApiResponse, BasicInfo, NftInfo, TokenInfo};
use tracing::{debug, error, warn};

use crate::{
    contracts,
    error::{ServerError, ServerResult},
    extractors::{AddressPath, TokenIdQuery},
    metrics,
    request_log::RequestLog,
    state::{HealthCheck, ServerState},
};

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check endpoint",
    description = "Returns the current health status of the API service including version, environment information and the status of the Ethereum node it reads from.",
    responses(
        (status = 200, description = "Health report", body = HealthCheck)
    )
)]
pub async fn health_handler(State(state): State<ServerState>) -> Json<HealthCheck> {
    Json(state.health_check().await)
}

/// Basic account and contract information
///
/// # Errors
///
/// Returns `ServerError::InvalidAddress` for a malformed address and
/// `ServerError::Chain` if any account query fails.
#[utoipa::path(
    get,
    path = "/api/contracts/{address}/basic",
    tag = "contracts",
    summary = "Basic account information",
    description = "Reports whether the address holds bytecode, its ether balance, transaction count and bytecode size.",
    params(
        ("address" = String, Path, description = "Ethereum address, mixed case must be a valid EIP-55 checksum")
    ),
    responses(
        (status = 200, description = "Account information", body = ApiResponse<BasicInfo>),
        (status = 400, description = "Invalid contract address", body = ApiResponse<BasicInfo>),
        (status = 500, description = "The Ethereum node request failed", body = ApiResponse<BasicInfo>)
    )
)]
pub async fn basic_info_handler(
    State(state): State<ServerState>,
    AddressPath(address): AddressPath,
) -> ServerResult<Json<ApiResponse<BasicInfo>>> {
    let log = state.request_log();
    let trace = RequestTrace::start(log, "basic", "Basic Contract Info");
    log.log(format!("Checking contract: {address}"));

    let outcome: ServerResult<BasicInfo> = async {
        let contract = validate_address(log, &address)?;
        Ok(contracts::basic_info(state.rpc_client(), &address, contract).await?)
    }
    .await;

    trace.finish("Basic Contract Data Retrieved:", outcome)
}

/// ERC721 collection and token information
///
/// # Errors
///
/// Returns `ServerError::InvalidAddress` for a malformed address and
/// `ServerError::InvalidTokenId` for a repeated `tokenId`. Contract call
/// failures, and token calls for an unparseable token id, are reported as
/// `N/A`.
#[utoipa::path(
    get,
    path = "/api/contracts/{address}/nft",
    tag = "contracts",
    summary = "ERC721 collection information",
    description = "Reads name, symbol, tokenURI and ownerOf for the given token. Each value that cannot be read is reported as N/A, as are tokenURI and ownerOf for a token id that is not a number.",
    params(
        ("address" = String, Path, description = "Ethereum address of the collection"),
        ("tokenId" = Option<String>, Query, description = "Token to inspect, decimal or 0x prefixed hex (defaults to 0)", example = "1")
    ),
    responses(
        (status = 200, description = "Collection information", body = ApiResponse<NftInfo>),
        (status = 400, description = "Invalid contract address or repeated token id", body = ApiResponse<NftInfo>),
        (status = 500, description = "Unexpected failure", body = ApiResponse<NftInfo>)
    )
)]
pub async fn nft_info_handler(
    State(state): State<ServerState>,
    AddressPath(address): AddressPath,
    TokenIdQuery(token_id): TokenIdQuery,
) -> ServerResult<Json<ApiResponse<NftInfo>>> {
    let log = state.request_log();
    let trace = RequestTrace::start(log, "nft", "NFT Contract Info");
    log.log(format!(
        "Checking NFT contract: {address}, TokenID: {token_id}"
    ));

    let outcome: ServerResult<NftInfo> = async {
        let contract = validate_address(log, &address)?;
        if contracts::parse_token_id(&token_id).is_none() {
            log.log(format!("Invalid token id: {token_id}"));
        }
        Ok(contracts::nft_info(state.rpc_client(), &address, contract, &token_id).await)
    }
    .await;

    trace.finish("NFT Contract Data Retrieved:", outcome)
}

/// ERC20 token information
///
/// # Errors
///
/// Returns `ServerError::InvalidAddress` for a malformed address. Contract
/// call failures are reported as `N/A`, or 18 decimals.
#[utoipa::path(
    get,
    path = "/api/contracts/{address}/token",
    tag = "contracts",
    summary = "ERC20 token information",
    description = "Reads name, symbol, decimals and totalSupply. Unreadable values are reported as N/A, decimals fall back to 18.",
    params(
        ("address" = String, Path, description = "Ethereum address of the token")
    ),
    responses(
        (status = 200, description = "Token information", body = ApiResponse<TokenInfo>),
        (status = 400, description = "Invalid contract address", body = ApiResponse<TokenInfo>),
        (status = 500, description = "Unexpected failure", body = ApiResponse<TokenInfo>)
    )
)]
pub async fn token_info_handler(
    State(state): State<ServerState>,
    AddressPath(address): AddressPath,
) -> ServerResult<Json<ApiResponse<TokenInfo>>> {
    let log = state.request_log();
    let trace = RequestTrace::start(log, "token", "Token Contract Info");
    log.log(format!("Checking token contract: {address}"));

    let outcome: ServerResult<TokenInfo> = async {
        let contract = validate_address(log, &address)?;
        Ok(contracts::token_info(state.rpc_client(), &address, contract).await)
    }
    .await;

    trace.finish("Token Contract Data Retrieved:", outcome)
}

fn validate_address(log: &dyn RequestLog, address: &str) -> ServerResult<Address> {
    parse_address(address).map_err(|e| {
        debug!(error = %e, "rejecting address");
        log.log(format!("Invalid address: {address}"));
        ServerError::InvalidAddress {
            address: address.to_string(),
        }
    })
}

/// One contract info request, from its start entry to its response
struct RequestTrace<'a> {
    log: &'a dyn RequestLog,
    endpoint: &'static str,
    started: Instant,
}

impl<'a> RequestTrace<'a> {
    fn start(log: &'a dyn RequestLog, endpoint: &'static str, title: &str) -> Self {
        log.log(format!("New {title} Request Started"));
        Self {
            log,
            endpoint,
            started: Instant::now(),
        }
    }

    fn finish<T: Serialize>(
        self,
        heading: &str,
        outcome: ServerResult<T>,
    ) -> ServerResult<Json<ApiResponse<T>>> {
        let elapsed = self.started.elapsed();

        let status = match &outcome {
            Ok(data) => {
                self.log.log(heading);
                match serde_json::to_string_pretty(data) {
                    Ok(payload) => self.log.log(payload),
                    Err(e) => warn!(error = %e, "failed to render payload for the request log"),
                }
                self.log
                    .log(format!("Request completed in {}ms", elapsed.as_millis()));
                StatusCode::OK
            }
            Err(e) => {
                let status = e.status_code();
                if status.is_server_error() {
                    error!(endpoint = self.endpoint, error = %e, "contract info request failed");
                    self.log.log(format!("Error: {e}"));
                }
                status
            }
        };

        metrics::record_request(self.endpoint, status, elapsed.as_secs_f64());

        outcome.map(|data| Json(ApiResponse::success(data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request_log::MemoryRequestLog;

    #[test]
    fn invalid_address_is_logged() {
        let memory = MemoryRequestLog::new();

        let result = validate_address(&memory, "0x123");

        assert!(matches!(result, Err(ServerError::InvalidAddress { .. })));
        assert_eq!(memory.messages(), vec!["Invalid address: 0x123"]);
    }

    #[test]
    fn successful_trace_logs_payload_and_timing() {
        let memory = MemoryRequestLog::new();
        let trace = RequestTrace::start(&memory, "token", "Token Contract Info");

        let response = trace
            .finish("Token Contract Data Retrieved:", Ok(serde_json::json!({"decimals": 18})))
            .unwrap();

        assert!(response.0.success);
        let messages = memory.messages();
        assert_eq!(messages[0], "New Token Contract Info Request Started");
        assert_eq!(messages[1], "Token Contract Data Retrieved:");
        assert_eq!(messages[2], "{\n  \"decimals\": 18\n}");
        assert!(messages[3].starts_with("Request completed in "));
        assert!(messages[3].ends_with("ms"));
    }

    #[test]
    fn failed_trace_logs_error() {
        let memory = MemoryRequestLog::new();
        let trace = RequestTrace::start(&memory, "basic", "Basic Contract Info");

        let result = trace.finish::<BasicInfo>(
            "Basic Contract Data Retrieved:",
            Err(ServerError::Chain(chain_client::ChainError::Timeout {
                timeout_seconds: 5,
            })),
        );

        assert!(result.is_err());
        assert_eq!(
            memory.messages().last().unwrap(),
            "Error: Request timeout after 5 seconds"
        );
    }
}
