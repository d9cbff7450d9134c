//! JSON-RPC 2.0 types and utilities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

// Error codes (from the JSON-RPC 2.0 spec plus the implementation-defined
// range; this surface only ever emits PARSE_ERROR and SERVER_ERROR).
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
pub const SERVER_ERROR: i32 = -32000;

/// JSON-RPC 2.0 Request ID (string, number, or null); echoed opaquely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
    Null,
}

/// JSON-RPC 2.0 Request.
///
/// `jsonrpc` and `method` are defaulted so that a `{}` body deserializes and
/// falls through to the unrecognized-method branch instead of failing as a
/// parse error.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
}

/// JSON-RPC 2.0 Response. `id` is always serialized (null when absent).
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<RequestId>,
}

/// JSON-RPC 2.0 Error object.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub fn new(code: i32, message: String) -> Self {
        Self { code, message }
    }

    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR, "Parse error".to_string())
    }

    pub fn server_error(message: String) -> Self {
        Self::new(SERVER_ERROR, message)
    }
}

/// Create a successful JSON-RPC response.
pub fn success_response(id: Option<RequestId>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse { jsonrpc: JSONRPC_VERSION.to_string(), result: Some(result), error: None, id }
}

/// Create an error JSON-RPC response.
pub fn error_response(id: Option<RequestId>, error: JsonRpcError) -> JsonRpcResponse {
    JsonRpcResponse { jsonrpc: JSONRPC_VERSION.to_string(), result: None, error: Some(error), id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_ids_round_trip_untagged() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 7, "method": "tools/list"}))
                .unwrap();
        assert_eq!(request.id, Some(RequestId::Number(7)));

        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": "abc", "method": "x"})).unwrap();
        assert_eq!(request.id, Some(RequestId::String("abc".to_string())));
    }

    #[test]
    fn empty_object_is_a_valid_request_with_no_method() {
        let request: JsonRpcRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.method, "");
        assert!(request.id.is_none());
    }

    #[test]
    fn error_responses_serialize_a_null_id() {
        let response = error_response(None, JsonRpcError::parse_error());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert_eq!(value["error"]["code"], json!(PARSE_ERROR));
        assert_eq!(value["error"]["message"], json!("Parse error"));
        assert!(value.get("result").is_none());
    }

    #[test]
    fn success_responses_echo_the_id() {
        let response = success_response(Some(RequestId::Number(3)), json!({"ok": true}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], json!(3));
        assert_eq!(value["result"], json!({"ok": true}));
        assert!(value.get("error").is_none());
    }
}
