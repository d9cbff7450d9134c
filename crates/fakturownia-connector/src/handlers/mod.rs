//! Resource method handlers and the router over them.
//!
//! Every handler has the same shape: `Ok(Some(value))` when it recognized and
//! executed the method, `Ok(None)` when the method belongs to another
//! resource, `Err` for anything that went wrong while executing. The sentinel
//! lets [`dispatch_any`] probe handlers in order without treating a miss as a
//! failure.

pub mod categories;
pub mod clients;
pub mod departments;
pub mod invoices;
pub mod payments;
pub mod products;
pub mod warehouses;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::{ConnectorError, ConnectorResult};

/// Route an unscoped method name across every resource handler.
///
/// The order is fixed but does not affect which handler wins: method names
/// are globally unique across resources, an invariant that must hold for any
/// method added in the future.
pub async fn dispatch_any(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Value> {
    if let Some(result) = invoices::handle(method, params, client).await? {
        return Ok(result);
    }
    if let Some(result) = clients::handle(method, params, client).await? {
        return Ok(result);
    }
    if let Some(result) = products::handle(method, params, client).await? {
        return Ok(result);
    }
    if let Some(result) = payments::handle(method, params, client).await? {
        return Ok(result);
    }
    if let Some(result) = categories::handle(method, params, client).await? {
        return Ok(result);
    }
    if let Some(result) = warehouses::handle(method, params, client).await? {
        return Ok(result);
    }
    if let Some(result) = departments::handle(method, params, client).await? {
        return Ok(result);
    }
    Err(ConnectorError::UnknownMethod(method.to_string()))
}
