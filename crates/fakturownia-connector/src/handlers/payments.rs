//! Banking payment methods.
//!
//! Two path quirks of the remote API are preserved here: get-by-id uses the
//! singular `/banking/payment/{id}.json` while update/delete use the plural
//! form, and updates go out as PATCH rather than PUT.

use fakturownia_core::Resource;
use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiClient, Query};
use crate::error::ConnectorResult;
use crate::params::{apply_filters, optional_query, required_data, required_id, scalar_or};

const RESOURCE: Resource = Resource::Payments;

pub async fn handle(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Option<Value>> {
    let result = match method {
        "fakt_get_payments" => {
            let mut query = Query::new();
            query.set("page", scalar_or(params, "page", "1"));
            query.set("per_page", scalar_or(params, "perPage", "10"));
            optional_query(&mut query, params, "include", "include");
            apply_filters(&mut query, params);
            client.fetch(RESOURCE, RESOURCE.collection_path(), query).await?
        }
        "fakt_get_payment" => {
            let id = required_id(params, "paymentId", "Payment ID is required")?;
            client.fetch(RESOURCE, &format!("/banking/payment/{id}.json"), Query::new()).await?
        }
        "fakt_create_payment" => {
            let data = required_data(
                params,
                "paymentData",
                "Payment data is required for creating a payment",
            )?;
            client.write(RESOURCE, Method::POST, RESOURCE.collection_path(), data).await?
        }
        "fakt_update_payment" => {
            let id =
                required_id(params, "paymentId", "Payment ID is required for updating a payment")?;
            let data = required_data(
                params,
                "paymentData",
                "Payment data is required for updating a payment",
            )?;
            client
                .write(RESOURCE, Method::PATCH, &format!("/banking/payments/{id}.json"), data)
                .await?
        }
        "fakt_delete_payment" => {
            let id =
                required_id(params, "paymentId", "Payment ID is required for deleting a payment")?;
            client.delete(RESOURCE, &format!("/banking/payments/{id}.json")).await?
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}
