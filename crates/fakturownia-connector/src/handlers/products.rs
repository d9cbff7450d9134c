//! Product methods.
//!
//! Products have no delete operation; the external API does not offer one.

use fakturownia_core::Resource;
use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiClient, Query};
use crate::error::ConnectorResult;
use crate::params::{apply_filters, optional_query, required_data, required_id, scalar_or};

const RESOURCE: Resource = Resource::Products;

pub async fn handle(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Option<Value>> {
    let result = match method {
        "fakt_get_products" => {
            let mut query = Query::new();
            query.set("page", scalar_or(params, "page", "1"));
            query.set("per_page", scalar_or(params, "perPage", "10"));
            optional_query(&mut query, params, "warehouseId", "warehouse_id");
            apply_filters(&mut query, params);
            client.fetch(RESOURCE, RESOURCE.collection_path(), query).await?
        }
        "fakt_get_product" => {
            let id = required_id(params, "productId", "Product ID is required")?;
            let mut query = Query::new();
            optional_query(&mut query, params, "warehouseId", "warehouse_id");
            client.fetch(RESOURCE, &format!("/products/{id}.json"), query).await?
        }
        "fakt_create_product" => {
            let data = required_data(
                params,
                "productData",
                "Product data is required for creating a product",
            )?;
            client.write(RESOURCE, Method::POST, RESOURCE.collection_path(), data).await?
        }
        "fakt_update_product" => {
            let id =
                required_id(params, "productId", "Product ID is required for updating a product")?;
            let data = required_data(
                params,
                "productData",
                "Product data is required for updating a product",
            )?;
            client.write(RESOURCE, Method::PUT, &format!("/products/{id}.json"), data).await?
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}
