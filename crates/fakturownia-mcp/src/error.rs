//! Error handling for the MCP layer.

use thiserror::Error;

use fakturownia_connector::ConnectorError;
use fakturownia_core::CoreError;

use crate::jsonrpc::JsonRpcError;

pub type McpResult<T> = Result<T, McpError>;

#[derive(Debug, Error)]
pub enum McpError {
    #[error(transparent)]
    Connector(#[from] ConnectorError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The endpoint's resource does not recognize the tool name.
    #[error("{0} method not supported: {1}")]
    UnsupportedTool(&'static str, String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl McpError {
    /// Every failing `tools/call` surfaces as the implementation-defined
    /// server error code carrying the error's message.
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        JsonRpcError::server_error(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonrpc::SERVER_ERROR;

    #[test]
    fn all_tool_call_errors_map_to_the_server_error_code() {
        let err = McpError::UnsupportedTool("Categories", "fakt_get_invoices".to_string());
        let rpc = err.to_jsonrpc_error();
        assert_eq!(rpc.code, SERVER_ERROR);
        assert_eq!(rpc.message, "Categories method not supported: fakt_get_invoices");

        let rpc = McpError::Core(CoreError::MissingCredentials).to_jsonrpc_error();
        assert_eq!(rpc.code, SERVER_ERROR);
        assert_eq!(rpc.message, "Domain and API token are required");
    }
}
