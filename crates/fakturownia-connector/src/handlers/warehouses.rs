//! Warehouse methods, including the warehouse-document sub-resource.

use fakturownia_core::Resource;
use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiClient, Query};
use crate::error::ConnectorResult;
use crate::params::{apply_filters, required_data, required_id, scalar_or};

const RESOURCE: Resource = Resource::Warehouses;
const DOCUMENTS: Resource = Resource::WarehouseDocuments;

pub async fn handle(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Option<Value>> {
    let result = match method {
        "fakt_get_warehouses" => {
            let mut query = Query::new();
            apply_filters(&mut query, params);
            client.fetch(RESOURCE, RESOURCE.collection_path(), query).await?
        }
        "fakt_get_warehouse" => {
            let id = required_id(params, "warehouseId", "Warehouse ID is required")?;
            client.fetch(RESOURCE, &format!("/warehouses/{id}.json"), Query::new()).await?
        }
        "fakt_create_warehouse" => {
            let data = required_data(
                params,
                "warehouseData",
                "Warehouse data is required for creating a warehouse",
            )?;
            client.write(RESOURCE, Method::POST, RESOURCE.collection_path(), data).await?
        }
        "fakt_update_warehouse" => {
            let id = required_id(
                params,
                "warehouseId",
                "Warehouse ID is required for updating a warehouse",
            )?;
            let data = required_data(
                params,
                "warehouseData",
                "Warehouse data is required for updating a warehouse",
            )?;
            client.write(RESOURCE, Method::PUT, &format!("/warehouses/{id}.json"), data).await?
        }
        "fakt_delete_warehouse" => {
            let id = required_id(
                params,
                "warehouseId",
                "Warehouse ID is required for deleting a warehouse",
            )?;
            client.delete(RESOURCE, &format!("/warehouses/{id}.json")).await?
        }
        "fakt_get_warehouse_documents" => {
            let mut query = Query::new();
            query.set("page", scalar_or(params, "page", "1"));
            query.set("per_page", scalar_or(params, "perPage", "10"));
            apply_filters(&mut query, params);
            client.fetch(DOCUMENTS, DOCUMENTS.collection_path(), query).await?
        }
        "fakt_get_warehouse_document" => {
            let id = required_id(params, "documentId", "Document ID is required")?;
            client
                .fetch(DOCUMENTS, &format!("/warehouse_documents/{id}.json"), Query::new())
                .await?
        }
        "fakt_create_warehouse_document" => {
            let data = required_data(
                params,
                "documentData",
                "Document data is required for creating a warehouse document",
            )?;
            client.write(DOCUMENTS, Method::POST, DOCUMENTS.collection_path(), data).await?
        }
        "fakt_update_warehouse_document" => {
            let id = required_id(
                params,
                "documentId",
                "Document ID is required for updating a warehouse document",
            )?;
            let data = required_data(
                params,
                "documentData",
                "Document data is required for updating a warehouse document",
            )?;
            client
                .write(DOCUMENTS, Method::PUT, &format!("/warehouse_documents/{id}.json"), data)
                .await?
        }
        "fakt_delete_warehouse_document" => {
            let id = required_id(
                params,
                "documentId",
                "Document ID is required for deleting a warehouse document",
            )?;
            client.delete(DOCUMENTS, &format!("/warehouse_documents/{id}.json")).await?
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}
