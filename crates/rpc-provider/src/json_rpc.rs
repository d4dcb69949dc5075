// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC over HTTP client
//!
//! This module provides an implementation of the `ChainReader` trait on top of
//! an alloy provider talking to an Ethereum node through its JSON-RPC
//! endpoint. Transport failures are classified into [`RpcProviderError`].

use std::{fmt, time::Duration};

use alloy_json_rpc::RpcError;
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_client::RpcClient;
use alloy_rpc_types_eth::TransactionRequest;
use alloy_transport::{TransportError, TransportErrorKind};
use alloy_transport_http::Http;
use chain_client::{ChainError, ChainReader, HealthStatus};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Configuration for the JSON-RPC client
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Node endpoint
    pub url: Url,
    /// Per-request timeout in seconds, unbounded when `None`
    pub timeout_seconds: Option<u64>,
}

impl RpcConfig {
    /// Configuration without a request timeout
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout_seconds: None,
        }
    }

    /// Set a per-request timeout
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// Errors specific to the JSON-RPC client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RpcProviderError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Node answered with a non-success status
    #[error("node error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Node answered with a JSON-RPC error object
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response body was not a usable JSON-RPC response
    #[error("invalid response to {method}: {message}")]
    InvalidResponse {
        method: &'static str,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout { seconds: u64 },
}

impl From<RpcProviderError> for ChainError {
    fn from(value: RpcProviderError) -> Self {
        match value {
            RpcProviderError::Http(error) => ChainError::Http {
                message: error.to_string(),
            },
            RpcProviderError::Transport(message) => ChainError::Http { message },
            RpcProviderError::Status { status, message } => ChainError::Status { status, message },
            RpcProviderError::Rpc { code, message } => ChainError::Rpc { code, message },
            RpcProviderError::InvalidResponse { .. } => ChainError::InvalidResponse {
                message: value.to_string(),
            },
            RpcProviderError::Config(message) => ChainError::Configuration { message },
            RpcProviderError::Timeout { seconds } => ChainError::Timeout {
                timeout_seconds: seconds,
            },
        }
    }
}

/// Ethereum JSON-RPC client
pub struct JsonRpcClient {
    provider: RootProvider,
    config: RpcConfig,
}

impl fmt::Debug for JsonRpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonRpcClient")
            .field("url", &self.config.url.as_str())
            .field("timeout_seconds", &self.config.timeout_seconds)
            .finish_non_exhaustive()
    }
}

impl JsonRpcClient {
    /// Create a new JSON-RPC client
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an HTTP(S) URL, the timeout is
    /// zero, or the HTTP client cannot be built.
    pub fn new(config: RpcConfig) -> Result<Self, RpcProviderError> {
        if !matches!(config.url.scheme(), "http" | "https") {
            return Err(RpcProviderError::Config(format!(
                "unsupported RPC URL scheme: {}",
                config.url.scheme()
            )));
        }

        let mut builder =
            Client::builder().user_agent(concat!("contract-api/", env!("CARGO_PKG_VERSION")));

        if let Some(seconds) = config.timeout_seconds {
            if seconds == 0 {
                return Err(RpcProviderError::Config(
                    "timeout must be greater than 0".to_string(),
                ));
            }
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let transport = Http::with_client(builder.build()?, config.url.clone());
        let provider = RootProvider::new(RpcClient::new(transport, false));

        Ok(Self { provider, config })
    }

    /// Map an alloy transport failure onto the client's error taxonomy
    fn classify(&self, method: &'static str, error: TransportError) -> RpcProviderError {
        let classified = match error {
            RpcError::ErrorResp(payload) => RpcProviderError::Rpc {
                code: payload.code,
                message: payload.message.to_string(),
            },
            RpcError::NullResp => RpcProviderError::InvalidResponse {
                method,
                message: "empty result".to_string(),
            },
            RpcError::DeserError { err, .. } => RpcProviderError::InvalidResponse {
                method,
                message: err.to_string(),
            },
            RpcError::Transport(TransportErrorKind::HttpError(http)) => RpcProviderError::Status {
                status: http.status,
                message: http.body,
            },
            RpcError::Transport(TransportErrorKind::Custom(source)) => {
                let timed_out = source
                    .downcast_ref::<reqwest::Error>()
                    .is_some_and(reqwest::Error::is_timeout);
                match self.config.timeout_seconds {
                    Some(seconds) if timed_out => RpcProviderError::Timeout { seconds },
                    _ => RpcProviderError::Transport(source.to_string()),
                }
            }
            other => RpcProviderError::Transport(other.to_string()),
        };

        debug!(method, error = %classified, "JSON-RPC request failed");
        classified
    }
}

impl ChainReader for JsonRpcClient {
    async fn get_code(&self, address: Address) -> Result<Bytes, ChainError> {
        Ok(self
            .provider
            .get_code_at(address)
            .await
            .map_err(|e| self.classify("eth_getCode", e))?)
    }

    async fn get_balance(&self, address: Address) -> Result<U256, ChainError> {
        Ok(self
            .provider
            .get_balance(address)
            .await
            .map_err(|e| self.classify("eth_getBalance", e))?)
    }

    async fn get_transaction_count(&self, address: Address) -> Result<u64, ChainError> {
        Ok(self
            .provider
            .get_transaction_count(address)
            .await
            .map_err(|e| self.classify("eth_getTransactionCount", e))?)
    }

    async fn call_read_only(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
        let request = TransactionRequest::default().to(to).input(data.into());

        Ok(self
            .provider
            .call(request)
            .await
            .map_err(|e| self.classify("eth_call", e))?)
    }

    async fn health_check(&self) -> Result<HealthStatus, ChainError> {
        match self.provider.get_block_number().await {
            Ok(block) => {
                info!(block, "JSON-RPC node health check passed");
                Ok(HealthStatus::Up)
            }
            Err(e) => match self.classify("eth_blockNumber", e) {
                RpcProviderError::Status { status, .. }
                    if status == StatusCode::TOO_MANY_REQUESTS.as_u16() =>
                {
                    warn!("JSON-RPC node health check failed: rate limited");
                    Ok(HealthStatus::Degraded {
                        reason: "Rate limited".to_string(),
                    })
                }
                other => Err(other.into()),
            },
        }
    }

    fn name(&self) -> &'static str {
        "json-rpc"
    }
}
