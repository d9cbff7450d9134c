//! Department methods.

use fakturownia_core::Resource;
use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiClient, Query};
use crate::error::ConnectorResult;
use crate::params::{apply_filters, required_data, required_id};

const RESOURCE: Resource = Resource::Departments;

pub async fn handle(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Option<Value>> {
    let result = match method {
        "fakt_get_departments" => {
            let mut query = Query::new();
            apply_filters(&mut query, params);
            client.fetch(RESOURCE, RESOURCE.collection_path(), query).await?
        }
        "fakt_get_department" => {
            let id = required_id(params, "departmentId", "Department ID is required")?;
            client.fetch(RESOURCE, &format!("/departments/{id}.json"), Query::new()).await?
        }
        "fakt_create_department" => {
            let data = required_data(
                params,
                "departmentData",
                "Department data is required for creating a department",
            )?;
            client.write(RESOURCE, Method::POST, RESOURCE.collection_path(), data).await?
        }
        "fakt_update_department" => {
            let id = required_id(
                params,
                "departmentId",
                "Department ID is required for updating a department",
            )?;
            let data = required_data(
                params,
                "departmentData",
                "Department data is required for updating a department",
            )?;
            client.write(RESOURCE, Method::PUT, &format!("/departments/{id}.json"), data).await?
        }
        "fakt_delete_department" => {
            let id = required_id(
                params,
                "departmentId",
                "Department ID is required for deleting a department",
            )?;
            client.delete(RESOURCE, &format!("/departments/{id}.json")).await?
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}
