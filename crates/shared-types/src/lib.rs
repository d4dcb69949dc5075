// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the contract info API
//!
//! This crate provides the response shapes that are shared between the chain
//! client crates and the HTTP server, avoiding circular dependencies.

pub mod contract_info;
pub mod envelope;

pub use contract_info::{BasicInfo, DEFAULT_TOKEN_DECIMALS, NOT_AVAILABLE, NftInfo, TokenInfo};
pub use envelope::ApiResponse;
