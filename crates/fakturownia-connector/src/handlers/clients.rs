//! Client (contractor) methods.

use fakturownia_core::Resource;
use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiClient, Query};
use crate::error::ConnectorResult;
use crate::params::{apply_filters, optional_query, required_data, required_id, scalar_or};

const RESOURCE: Resource = Resource::Clients;

pub async fn handle(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Option<Value>> {
    let result = match method {
        "fakt_get_clients" => {
            let mut query = Query::new();
            query.set("page", scalar_or(params, "page", "1"));
            query.set("per_page", scalar_or(params, "perPage", "10"));
            optional_query(&mut query, params, "name", "name");
            optional_query(&mut query, params, "email", "email");
            optional_query(&mut query, params, "taxNo", "tax_no");
            apply_filters(&mut query, params);
            client.fetch(RESOURCE, RESOURCE.collection_path(), query).await?
        }
        "fakt_get_client" => {
            let id = required_id(params, "clientId", "Client ID is required")?;
            client.fetch(RESOURCE, &format!("/clients/{id}.json"), Query::new()).await?
        }
        "fakt_create_client" => {
            let data = required_data(
                params,
                "clientData",
                "Client data is required for creating a client",
            )?;
            client.write(RESOURCE, Method::POST, RESOURCE.collection_path(), data).await?
        }
        "fakt_update_client" => {
            let id = required_id(params, "clientId", "Client ID is required for updating a client")?;
            let data = required_data(
                params,
                "clientData",
                "Client data is required for updating a client",
            )?;
            client.write(RESOURCE, Method::PUT, &format!("/clients/{id}.json"), data).await?
        }
        "fakt_delete_client" => {
            let id = required_id(params, "clientId", "Client ID is required for deleting a client")?;
            client.delete(RESOURCE, &format!("/clients/{id}.json")).await?
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}
