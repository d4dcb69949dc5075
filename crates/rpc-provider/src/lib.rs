// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Ethereum JSON-RPC node integration
//!
//! This crate provides [`JsonRpcClient`], the implementation of
//! [`chain_client::ChainReader`] used in production. It reads from a single
//! configured node through an alloy provider over HTTP.
//!
//! # Features
//!
//! - **Single Long-Lived Handle**: one alloy provider backed by a pooled
//!   `reqwest::Client`, shared by every request
//! - **Typed Results**: quantities and byte strings decode straight into
//!   `alloy-primitives` types
//! - **No Hidden Retries**: each call is issued once; failures surface as
//!   [`chain_client::ChainError`] so callers decide whether to degrade or abort
//! - **Testing Support**: integration tests run against a wiremock JSON-RPC node

pub mod json_rpc;

pub use json_rpc::*;
