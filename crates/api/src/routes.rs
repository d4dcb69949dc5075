// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the contract
//! info API server.

pub mod handlers;

use axum::{Router, routing::get};
use handlers::{basic_info_handler, health_handler, nft_info_handler, token_info_handler};

use crate::{
    config::BasePath,
    metrics::metrics_handler,
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes with the contract endpoints under `base_path`
pub fn create_routes(base_path: &BasePath) -> Router<ServerState> {
    let health_routes = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler));

    let docs_routes = Router::new()
        .route("/api-doc/openapi.json", get(openapi_spec))
        .route("/swagger-ui", get(swagger_ui));

    let contract_routes = Router::new()
        .route("/{address}/basic", get(basic_info_handler))
        .route("/{address}/nft", get(nft_info_handler))
        .route("/{address}/token", get(token_info_handler));

    Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .nest(base_path.as_str(), contract_routes)
}
