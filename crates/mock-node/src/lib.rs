// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Mock Ethereum JSON-RPC node
//!
//! Wiremock matchers and responders that mimic a node closely enough for the
//! JSON-RPC client's encoding and decoding paths. Replies echo the request id.

use alloy_primitives::hex;
use alloy_sol_types::SolCall;
use serde_json::{Value, json};
use wiremock::{Match, Mock, MockServer, Request, Respond, ResponseTemplate};

/// Matches a JSON-RPC request by method name
#[derive(Debug, Clone)]
pub struct RpcMethod(pub &'static str);

impl Match for RpcMethod {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body).is_ok_and(|body| body["method"] == self.0)
    }
}

/// Matches an `eth_call` whose calldata starts with the given selector
#[derive(Debug, Clone)]
pub struct CallSelector(pub [u8; 4]);

impl Match for CallSelector {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return false;
        };
        let expected = hex::encode_prefixed(self.0);
        let call = &body["params"][0];

        // Calldata travels as `input`, older clients send `data`
        body["method"] == "eth_call"
            && call["input"]
                .as_str()
                .or_else(|| call["data"].as_str())
                .is_some_and(|data| data.to_ascii_lowercase().starts_with(&expected))
    }
}

/// JSON-RPC reply answering with the id of the request it responds to
#[derive(Debug, Clone)]
pub struct RpcReply {
    key: &'static str,
    value: Value,
}

impl Respond for RpcReply {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = serde_json::from_slice::<Value>(&request.body)
            .map(|body| body["id"].clone())
            .unwrap_or(Value::Null);

        let mut body = json!({ "jsonrpc": "2.0", "id": id });
        body[self.key] = self.value.clone();
        ResponseTemplate::new(200).set_body_json(body)
    }
}

/// Successful JSON-RPC response carrying `result`
pub fn rpc_result(result: Value) -> RpcReply {
    RpcReply {
        key: "result",
        value: result,
    }
}

/// JSON-RPC error response
pub fn rpc_error(code: i64, message: &str) -> RpcReply {
    RpcReply {
        key: "error",
        value: json!({ "code": code, "message": message }),
    }
}

/// Reverted `eth_call`
pub fn rpc_revert() -> RpcReply {
    rpc_error(3, "execution reverted")
}

/// `0x` prefixed hex of ABI encoded return data
pub fn encoded(output: &[u8]) -> Value {
    Value::String(hex::encode_prefixed(output))
}

/// Answer the account queries with fixed values
pub async fn mount_account(node: &MockServer, code: &str, balance: &str, nonce: &str) {
    for (method, result) in [
        ("eth_getCode", code),
        ("eth_getBalance", balance),
        ("eth_getTransactionCount", nonce),
    ] {
        Mock::given(RpcMethod(method))
            .respond_with(rpc_result(json!(result)))
            .mount(node)
            .await;
    }
}

/// Answer calls to `C` with ABI encoded `output`
pub async fn mount_call<C: SolCall>(node: &MockServer, output: &[u8]) {
    Mock::given(CallSelector(C::SELECTOR))
        .respond_with(rpc_result(encoded(output)))
        .mount(node)
        .await;
}

/// Revert every `eth_call` that no other mock answers
pub async fn mount_revert_fallback(node: &MockServer) {
    Mock::given(RpcMethod("eth_call"))
        .respond_with(rpc_revert())
        .with_priority(u8::MAX)
        .mount(node)
        .await;
}
