// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Contract Info API Server Implementation
//!
//! This crate provides the HTTP server that answers read-only questions about
//! Ethereum addresses, ERC20 tokens and ERC721 collections by querying a
//! JSON-RPC node. It is built with Axum and shuts down gracefully on signals.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration and environment management with hierarchical loading
//! - [`error`]: Error types and their mapping onto the response envelope
//! - [`extractors`]: Path and query extractors that reject inside the envelope
//! - [`state`]: Shared application state with cancellation token support
//! - [`server`]: Main server implementation, lifecycle, and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//! - [`contracts`]: Assembly of the basic, NFT and token payloads
//! - [`request_log`]: Console and file request log
//! - [`middleware`]: Request-entry logging
//! - [`metrics`]: Prometheus request counters and latency histograms
//! - [`openapi`]: `OpenAPI` specification and Swagger UI endpoints for API documentation
//!
//! # Key Features
//!
//! - **Per-Field Degradation**: contract calls that revert are reported as `N/A`
//! - **Injectable Logging**: request narration goes through the [`RequestLog`] trait
//! - **Graceful Shutdown**: coordinated termination using `CancellationToken`
//! - **Health Monitoring**: `/health` checks the configured node

pub mod config;
pub mod contracts;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod request_log;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{BasePath, Environment, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use request_log::{FileRequestLog, LogEntry, MemoryRequestLog, RequestLog};
pub use server::{Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
