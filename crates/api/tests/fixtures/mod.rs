// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code, missing_docs)]

//! Test fixtures for the contract info endpoints
//!
//! This module provides a mock Ethereum node and helpers that start the API
//! server against it.

use std::{net::SocketAddr, sync::Arc};

use contract_api::{MemoryRequestLog, Server, ServerConfig, ShutdownConfig};
use rpc_provider::{JsonRpcClient, RpcConfig};
use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

pub use mock_node::*;

/// Well known burn address, an account without code
pub const DEAD_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";

/// Checksummed address used as a contract in tests
pub const CONTRACT_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// API server wired to a mock node and an in-memory request log
pub struct TestApi {
    pub addr: SocketAddr,
    pub node: MockServer,
    pub log: Arc<MemoryRequestLog>,
    pub token: CancellationToken,
}

impl TestApi {
    pub async fn start() -> Self {
        let node = MockServer::start().await;
        let mut config = ServerConfig::for_testing();
        config.rpc_url = node.uri().parse().expect("mock node URI is a URL");

        let client = JsonRpcClient::new(RpcConfig::new(config.rpc_url.clone()))
            .expect("Failed to create JSON-RPC client");
        let log = Arc::new(MemoryRequestLog::new());

        let (addr, token) = Server::with_dependencies(
            config,
            ShutdownConfig::default(),
            Arc::new(client),
            log.clone(),
        )
        .run_for_testing()
        .await
        .expect("Failed to start test server");

        Self {
            addr,
            node,
            log,
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestApi {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
