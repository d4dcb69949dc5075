// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` document definition

use shared_types::{BasicInfo, NftInfo, TokenInfo};
use utoipa::OpenApi;

use crate::{
    config::Environment,
    routes::handlers,
    state::{HealthCheck, HealthStatus},
};

/// `OpenAPI` document of the contract info API
///
/// Contract endpoint paths are documented under the default base path.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Contract Info API",
        description = "Read-only account, ERC20 token and ERC721 NFT information served from an Ethereum JSON-RPC node"
    ),
    paths(
        handlers::health_handler,
        handlers::basic_info_handler,
        handlers::nft_info_handler,
        handlers::token_info_handler,
    ),
    components(schemas(
        BasicInfo,
        NftInfo,
        TokenInfo,
        HealthCheck,
        HealthStatus,
        Environment,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "contracts", description = "Contract, token and NFT information")
    )
)]
pub struct ApiDoc;
