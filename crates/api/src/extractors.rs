// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Custom extractors for the contract info endpoints
//!
//! Axum's `Path` and `Query` extractors reject with plain text bodies. These
//! extractors keep every failure inside the `ApiResponse` envelope.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use tracing::debug;

use crate::{error::ServerError, state::ServerState};

const TOKEN_ID_PARAM: &str = "tokenId";
const DEFAULT_TOKEN_ID: &str = "0";

/// Address path segment of the contract info endpoints
///
/// A segment that does not percent-decode to UTF-8 is kept in its encoded
/// form, so address validation rejects it like any other malformed address.
#[derive(Debug)]
pub struct AddressPath(pub String);

impl<S> FromRequestParts<S> for AddressPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(address)) => Ok(Self(address)),
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "address segment did not decode");
                Ok(Self(encoded_address_segment(parts.uri.path()).to_string()))
            }
        }
    }
}

/// The address segment precedes the endpoint name in `/{address}/{endpoint}`
fn encoded_address_segment(path: &str) -> &str {
    path.rsplit('/').nth(1).unwrap_or_default()
}

/// `tokenId` query value of the NFT endpoint, as requested
///
/// Absent and empty values become `"0"`. The value is not parsed here so it
/// can be echoed back unchanged.
#[derive(Debug)]
pub struct TokenIdQuery(pub String);

impl FromRequestParts<ServerState> for TokenIdQuery {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let reject = |token_id: String| {
            state
                .request_log()
                .log(format!("Invalid token id: {token_id}"));
            ServerError::InvalidTokenId { token_id }
        };

        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|_| reject(parts.uri.query().unwrap_or_default().to_string()))?;

        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == TOKEN_ID_PARAM)
            .map(|(_, value)| value)
            .collect();

        match values.as_slice() {
            [] => Ok(Self(DEFAULT_TOKEN_ID.to_string())),
            [value] if value.is_empty() => Ok(Self(DEFAULT_TOKEN_ID.to_string())),
            [value] => Ok(Self(value.clone())),
            _ => Err(reject(values.join(","))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::Request;
    use rpc_provider::{JsonRpcClient, RpcConfig};
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::{config::ServerConfig, request_log::MemoryRequestLog};

    fn state(log: Arc<MemoryRequestLog>) -> ServerState {
        let config = ServerConfig::for_testing();
        let client = JsonRpcClient::new(RpcConfig::new(config.rpc_url.clone())).unwrap();
        ServerState::new(config, Arc::new(client), log, CancellationToken::new())
    }

    async fn token_id(uri: &str, state: &ServerState) -> Result<TokenIdQuery, ServerError> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        TokenIdQuery::from_request_parts(&mut parts, state).await
    }

    #[test]
    fn address_segment_is_taken_before_endpoint() {
        assert_eq!(
            encoded_address_segment("/api/contracts/%FF%FE/basic"),
            "%FF%FE"
        );
        assert_eq!(encoded_address_segment("/%FF/nft"), "%FF");
        assert_eq!(encoded_address_segment("basic"), "");
    }

    #[tokio::test]
    async fn token_id_defaults_to_zero() {
        let state = state(Arc::new(MemoryRequestLog::new()));

        for uri in ["/x/nft", "/x/nft?tokenId=", "/x/nft?other=1"] {
            let TokenIdQuery(value) = token_id(uri, &state).await.unwrap();
            assert_eq!(value, "0", "{uri}");
        }
    }

    #[tokio::test]
    async fn token_id_is_kept_verbatim() {
        let state = state(Arc::new(MemoryRequestLog::new()));

        let TokenIdQuery(hex) = token_id("/x/nft?tokenId=0x2a", &state).await.unwrap();
        assert_eq!(hex, "0x2a");

        let TokenIdQuery(word) = token_id("/x/nft?tokenId=abc", &state).await.unwrap();
        assert_eq!(word, "abc");
    }

    #[tokio::test]
    async fn repeated_token_id_is_rejected_and_logged() {
        let log = Arc::new(MemoryRequestLog::new());
        let state = state(log.clone());

        let result = token_id("/x/nft?tokenId=1&tokenId=2", &state).await;

        match result {
            Err(ServerError::InvalidTokenId { token_id }) => assert_eq!(token_id, "1,2"),
            other => panic!("expected InvalidTokenId, got: {other:?}"),
        }
        assert_eq!(log.messages(), vec!["Invalid token id: 1,2"]);
    }
}
