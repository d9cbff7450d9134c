//! The request envelope adapter: the HTTP-facing front door shared by every
//! resource endpoint.
//!
//! One function family parameterized by a static [`Endpoint`] descriptor,
//! which keeps the per-endpoint quirks (initialize on invoices only, the
//! legacy direct-dispatch fallback, the parse-error status split) declared
//! in one table instead of repeated per route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};
use tracing::{debug, warn};

use fakturownia_connector::{dispatch_any, handlers, ApiClient, ConnectorResult};

use crate::catalog;
use crate::error::{McpError, McpResult};
use crate::jsonrpc::{
    error_response, success_response, JsonRpcError, JsonRpcRequest, RequestId,
};
use crate::mcp::{
    text_result, InitializeResult, ServerInfo, Tool, ToolsListResult, METHOD_INITIALIZE,
    METHOD_TOOLS_CALL, METHOD_TOOLS_LIST, PROTOCOL_VERSION,
};
use crate::server::AppState;

/// Which handler set an endpoint dispatches into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Categories,
    Clients,
    Departments,
    Invoices,
    Payments,
    Products,
    Warehouses,
    /// Every handler, probed through the method router.
    All,
}

impl Family {
    pub async fn dispatch(
        self,
        method: &str,
        params: &Value,
        client: &ApiClient,
    ) -> ConnectorResult<Option<Value>> {
        match self {
            Family::Categories => handlers::categories::handle(method, params, client).await,
            Family::Clients => handlers::clients::handle(method, params, client).await,
            Family::Departments => handlers::departments::handle(method, params, client).await,
            Family::Invoices => handlers::invoices::handle(method, params, client).await,
            Family::Payments => handlers::payments::handle(method, params, client).await,
            Family::Products => handlers::products::handle(method, params, client).await,
            Family::Warehouses => handlers::warehouses::handle(method, params, client).await,
            Family::All => dispatch_any(method, params, client).await.map(Some),
        }
    }
}

/// Static description of one endpoint's behavior.
pub struct Endpoint {
    pub family: Family,
    pub server_name: &'static str,
    pub description: &'static str,
    /// Label in "{label} method not supported: {tool}".
    pub unsupported_label: &'static str,
    /// Resource word in the plain 400 "Only tools/call ..." body.
    pub route_label: &'static str,
    /// Route the endpoint is mounted at (shown in the GET document).
    pub route_path: &'static str,
    pub tools: fn() -> Vec<Tool>,
    /// Whether `initialize` is recognized (invoices and aggregator only).
    pub initialize: bool,
    /// Whether unrecognized methods fall back to direct dispatch.
    pub legacy_fallback: bool,
    /// Parse errors answer HTTP 400 here, HTTP 200 elsewhere. The split is
    /// deliberate, for compatibility with existing callers.
    pub strict_parse_status: bool,
}

pub static CATEGORIES: Endpoint = Endpoint {
    family: Family::Categories,
    server_name: "Fakturownia Categories MCP Server",
    description: "MCP Server for Fakturownia.pl - Categories Only",
    unsupported_label: "Categories",
    route_label: "categories",
    route_path: "/categories",
    tools: catalog::categories,
    initialize: false,
    legacy_fallback: false,
    strict_parse_status: false,
};

pub static CLIENTS: Endpoint = Endpoint {
    family: Family::Clients,
    server_name: "Fakturownia Clients MCP Server",
    description: "MCP Server for Fakturownia.pl - Clients Only",
    unsupported_label: "Clients",
    route_label: "clients",
    route_path: "/clients",
    tools: catalog::clients,
    initialize: false,
    legacy_fallback: false,
    strict_parse_status: false,
};

pub static DEPARTMENTS: Endpoint = Endpoint {
    family: Family::Departments,
    server_name: "Fakturownia Departments MCP Server",
    description: "MCP Server for Fakturownia.pl - Departments Only",
    unsupported_label: "Departments",
    route_label: "departments",
    route_path: "/departments",
    tools: catalog::departments,
    initialize: false,
    legacy_fallback: false,
    strict_parse_status: false,
};

pub static INVOICES: Endpoint = Endpoint {
    family: Family::Invoices,
    server_name: "Fakturownia Invoices MCP Server",
    description: "MCP Server for Fakturownia.pl - Invoices Only",
    unsupported_label: "Invoice",
    route_label: "invoices",
    route_path: "/invoices",
    tools: catalog::invoices,
    initialize: true,
    legacy_fallback: true,
    strict_parse_status: true,
};

pub static PAYMENTS: Endpoint = Endpoint {
    family: Family::Payments,
    server_name: "Fakturownia Payments MCP Server",
    description: "MCP Server for Fakturownia.pl - Payments Only",
    unsupported_label: "Payments",
    route_label: "payments",
    route_path: "/payments",
    tools: catalog::payments,
    initialize: false,
    legacy_fallback: false,
    strict_parse_status: false,
};

pub static PRODUCTS: Endpoint = Endpoint {
    family: Family::Products,
    server_name: "Fakturownia Products MCP Server",
    description: "MCP Server for Fakturownia.pl - Products Only",
    unsupported_label: "Products",
    route_label: "products",
    route_path: "/products",
    tools: catalog::products,
    initialize: false,
    legacy_fallback: false,
    strict_parse_status: false,
};

pub static WAREHOUSES: Endpoint = Endpoint {
    family: Family::Warehouses,
    server_name: "Fakturownia Warehouses MCP Server",
    description: "MCP Server for Fakturownia.pl - Warehouses Only",
    unsupported_label: "Warehouses",
    route_label: "warehouses",
    route_path: "/warehouses",
    tools: catalog::warehouses,
    initialize: false,
    legacy_fallback: false,
    strict_parse_status: false,
};

pub static AGGREGATOR: Endpoint = Endpoint {
    family: Family::All,
    server_name: "Fakturownia MCP Server",
    description: "MCP Server for Fakturownia.pl",
    unsupported_label: "Fakturownia",
    route_label: "fakturownia",
    route_path: "/fakturownia",
    tools: catalog::all,
    initialize: true,
    legacy_fallback: true,
    strict_parse_status: true,
};

/// Static identity document served on GET.
pub fn info_document(endpoint: &Endpoint) -> Value {
    let supported: Vec<String> = (endpoint.tools)().into_iter().map(|tool| tool.name).collect();
    let mut doc = json!({
        "name": endpoint.server_name,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "description": endpoint.description,
        "supportedMethods": supported,
    });
    if endpoint.legacy_fallback {
        doc["endpoints"] = json!({
            "mcp": format!("{} (POST with MCP protocol)", endpoint.route_path),
            "direct": format!("{} (POST with direct API calls)", endpoint.route_path),
        });
    }
    doc
}

/// Handle one JSON-RPC POST body.
pub async fn handle_rpc(endpoint: &'static Endpoint, state: &AppState, body: &[u8]) -> Response {
    // An empty body is treated as `{}`, which falls through to the
    // unrecognized-method branch rather than a parse error.
    let body: &[u8] = if body.is_empty() { b"{}" } else { body };

    let request: JsonRpcRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            warn!(endpoint = endpoint.route_label, error = %e, "unparsable JSON-RPC body");
            let status = if endpoint.strict_parse_status {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::OK
            };
            return (status, Json(error_response(None, JsonRpcError::parse_error())))
                .into_response();
        }
    };

    let method = request.method.clone();
    debug!(endpoint = endpoint.route_label, method = %method, "handling JSON-RPC request");

    match method.as_str() {
        METHOD_INITIALIZE if endpoint.initialize => {
            respond(request.id, initialize_result(endpoint))
        }
        METHOD_TOOLS_LIST => respond(request.id, tools_list(endpoint)),
        METHOD_TOOLS_CALL => {
            let params = request.params.unwrap_or(Value::Null);
            respond(request.id, tools_call(endpoint, state, &params).await)
        }
        _ if endpoint.legacy_fallback => {
            // Direct (non-MCP) dispatch kept for backward compatibility.
            // Failures here report a null id.
            match legacy_call(endpoint, state, &method, request.params.as_ref()).await {
                Ok(result) => {
                    (StatusCode::OK, Json(success_response(request.id, result))).into_response()
                }
                Err(e) => {
                    (StatusCode::OK, Json(error_response(None, e.to_jsonrpc_error())))
                        .into_response()
                }
            }
        }
        _ => {
            debug!(endpoint = endpoint.route_label, method = %method, "unrecognized method");
            let body = json!({
                "error": format!(
                    "Only tools/call method is supported for {} endpoint",
                    endpoint.route_label
                ),
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}

fn respond(id: Option<RequestId>, result: McpResult<Value>) -> Response {
    let response = match result {
        Ok(value) => success_response(id, value),
        Err(e) => error_response(id, e.to_jsonrpc_error()),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn initialize_result(endpoint: &Endpoint) -> McpResult<Value> {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: json!({"tools": {}}),
        server_info: ServerInfo {
            name: endpoint.server_name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };
    Ok(serde_json::to_value(result)?)
}

fn tools_list(endpoint: &Endpoint) -> McpResult<Value> {
    let result = ToolsListResult { tools: (endpoint.tools)() };
    Ok(serde_json::to_value(result)?)
}

async fn tools_call(
    endpoint: &Endpoint,
    state: &AppState,
    params: &Value,
) -> McpResult<Value> {
    let name = params.get("name").and_then(Value::as_str).unwrap_or_default().to_string();
    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    let client = state.client(&arguments)?;
    match endpoint.family.dispatch(&name, &arguments, &client).await? {
        Some(result) => Ok(serde_json::to_value(text_result(&result))?),
        None => Err(McpError::UnsupportedTool(endpoint.unsupported_label, name)),
    }
}

async fn legacy_call(
    endpoint: &Endpoint,
    state: &AppState,
    method: &str,
    params: Option<&Value>,
) -> McpResult<Value> {
    let params = params.cloned().unwrap_or_else(|| json!({}));
    let client = state.client(&params)?;
    match endpoint.family.dispatch(method, &params, &client).await? {
        Some(result) => Ok(result),
        None => Err(McpError::UnsupportedTool(endpoint.unsupported_label, method.to_string())),
    }
}
