// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response envelope wrapping every contract info payload

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned by every contract info endpoint
///
/// Successful responses carry `data`, failed responses carry a non-empty
/// `message`. The absent field is omitted from the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload of a successful request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap a successful payload
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Build a failure envelope with the given message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_omits_message() {
        let response = ApiResponse::success(json!({"address": "0xabc"}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({"success": true, "data": {"address": "0xabc"}}));
    }

    #[test]
    fn failure_omits_data() {
        let response = ApiResponse::<()>::failure("Invalid contract address");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({"success": false, "message": "Invalid contract address"})
        );
    }

    #[test]
    fn failure_deserializes_without_data() {
        let parsed: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":false,"message":"boom"}"#).unwrap();

        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.message.as_deref(), Some("boom"));
    }
}
