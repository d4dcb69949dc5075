// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the contract info API
//! server: configuration, the JSON-RPC client, the request log and the
//! cancellation token used for coordinated shutdown.

use std::sync::Arc;

use chain_client::ChainReader;
use rpc_provider::JsonRpcClient;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

use crate::{
    config::{Environment, ServerConfig},
    request_log::RequestLog,
};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// Client for the configured Ethereum node
    rpc_client: Arc<JsonRpcClient>,
    /// Request log sink
    request_log: Arc<dyn RequestLog>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `rpc_client` - Client for the Ethereum node
    /// * `request_log` - Sink for request log entries
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(
        config: ServerConfig,
        rpc_client: Arc<JsonRpcClient>,
        request_log: Arc<dyn RequestLog>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            config,
            rpc_client,
            request_log,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Client for the Ethereum node
    pub fn rpc_client(&self) -> &JsonRpcClient {
        &self.rpc_client
    }

    /// Request log sink
    pub fn request_log(&self) -> &dyn RequestLog {
        self.request_log.as_ref()
    }

    /// Check the node and report overall service health
    pub async fn health_check(&self) -> HealthCheck {
        let node = match self.rpc_client.health_check().await {
            Ok(status) => HealthStatus::from(status),
            Err(e) => HealthStatus::Down {
                reason: e.to_string().into_boxed_str(),
            },
        };

        let status = match node {
            HealthStatus::Down { .. } => HealthStatus::Degraded {
                reason: Box::from("Ethereum node unavailable"),
            },
            _ => HealthStatus::Up,
        };

        HealthCheck {
            status,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
            node,
            node_reader: Box::from(self.rpc_client.name()),
        }
    }
}

/// Health status of a service or dependency
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum HealthStatus {
    /// Service is fully operational and responding normally
    Up,

    /// Service is not operational or has critical failures
    Down {
        /// Human-readable explanation of why the service is down
        reason: Box<str>,
    },

    /// Service is operational but experiencing performance issues or partial failures
    Degraded {
        /// Human-readable explanation of the degradation condition
        reason: Box<str>,
    },
}

impl From<chain_client::HealthStatus> for HealthStatus {
    fn from(status: chain_client::HealthStatus) -> Self {
        match status {
            chain_client::HealthStatus::Up => HealthStatus::Up,
            chain_client::HealthStatus::Degraded { reason } => HealthStatus::Degraded {
                reason: reason.into_boxed_str(),
            },
            chain_client::HealthStatus::Down { reason } => HealthStatus::Down {
                reason: reason.into_boxed_str(),
            },
        }
    }
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    #[schema(value_type = String)]
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
    /// Status of the Ethereum node
    pub node: HealthStatus,
    /// Reader used to reach the node
    #[schema(value_type = String, example = "json-rpc")]
    pub node_reader: Box<str>,
}
