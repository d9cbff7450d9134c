//! Category methods.

use fakturownia_core::Resource;
use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiClient, Query};
use crate::error::ConnectorResult;
use crate::params::{apply_filters, required_data, required_id};

const RESOURCE: Resource = Resource::Categories;

pub async fn handle(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Option<Value>> {
    let result = match method {
        "fakt_get_categories" => {
            let mut query = Query::new();
            apply_filters(&mut query, params);
            client.fetch(RESOURCE, RESOURCE.collection_path(), query).await?
        }
        "fakt_get_category" => {
            let id = required_id(params, "categoryId", "Category ID is required")?;
            client.fetch(RESOURCE, &format!("/categories/{id}.json"), Query::new()).await?
        }
        "fakt_create_category" => {
            let data = required_data(
                params,
                "categoryData",
                "Category data is required for creating a category",
            )?;
            client.write(RESOURCE, Method::POST, RESOURCE.collection_path(), data).await?
        }
        "fakt_update_category" => {
            let id =
                required_id(params, "categoryId", "Category ID is required for updating a category")?;
            let data = required_data(
                params,
                "categoryData",
                "Category data is required for updating a category",
            )?;
            client.write(RESOURCE, Method::PUT, &format!("/categories/{id}.json"), data).await?
        }
        "fakt_delete_category" => {
            let id =
                required_id(params, "categoryId", "Category ID is required for deleting a category")?;
            client.delete(RESOURCE, &format!("/categories/{id}.json")).await?
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}
