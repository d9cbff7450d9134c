//! MCP (Model Context Protocol) types for the tool-call surface.
//!
//! Only the 2024-11-05 subset this gateway exposes: tool descriptors with a
//! loose JSON input schema, text content blocks, and the fixed initialize
//! envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol revision advertised by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// MCP method names
pub const METHOD_INITIALIZE: &str = "initialize";
pub const METHOD_TOOLS_LIST: &str = "tools/list";
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// One externally invocable operation: name, human description, input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// `tools/list` result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    pub tools: Vec<Tool>,
}

/// Single text block inside a `tools/call` result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextContent {
    pub fn new(text: String) -> Self {
        Self { kind: "text".to_string(), text }
    }
}

/// `tools/call` result payload: one text block per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallResult {
    pub content: Vec<TextContent>,
}

/// Wrap a raw handler result as MCP content: a single text block holding the
/// pretty-printed JSON (two-space indentation).
pub fn text_result(value: &Value) -> ToolsCallResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    ToolsCallResult { content: vec![TextContent::new(text)] }
}

/// `initialize` result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: Value,
    pub server_info: ServerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}
