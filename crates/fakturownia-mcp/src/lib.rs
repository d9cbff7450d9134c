//! JSON-RPC / MCP front door for the Fakturownia gateway.
//!
//! Each resource family gets one HTTP endpoint speaking a small MCP subset
//! (`initialize` on invoices only, `tools/list`, `tools/call`), plus
//! `/fakturownia` as the aggregator over all of them.
//! The envelope adapter itself is a single function family parameterized by
//! a static [`Endpoint`] descriptor.

pub mod catalog;
pub mod endpoint;
pub mod error;
pub mod jsonrpc;
pub mod mcp;
pub mod server;

pub use endpoint::{Endpoint, Family};
pub use error::{McpError, McpResult};
pub use server::{app, AppState};
