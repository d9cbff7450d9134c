//! Invoice methods: CRUD plus the three special operations (send by email,
//! change status, PDF download).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use fakturownia_core::Resource;
use reqwest::Method;
use serde_json::{json, Value};

use crate::client::{ApiClient, Query};
use crate::error::ConnectorResult;
use crate::params::{apply_filters, optional_query, required_data, required_id, scalar_or};

const RESOURCE: Resource = Resource::Invoices;

pub async fn handle(
    method: &str,
    params: &Value,
    client: &ApiClient,
) -> ConnectorResult<Option<Value>> {
    let result = match method {
        "fakt_get_invoices" => {
            let mut query = Query::new();
            query.set("page", scalar_or(params, "page", "1"));
            query.set("per_page", scalar_or(params, "perPage", "10"));
            query.set("period", scalar_or(params, "period", "this_month"));
            query.set("include_positions", scalar_or(params, "includePositions", "false"));
            apply_filters(&mut query, params);
            client.fetch(RESOURCE, RESOURCE.collection_path(), query).await?
        }
        "fakt_get_invoice" => {
            let id = required_id(params, "invoiceId", "Invoice ID is required")?;
            client.fetch(RESOURCE, &format!("/invoices/{id}.json"), Query::new()).await?
        }
        "fakt_create_invoice" => {
            let data = required_data(
                params,
                "invoiceData",
                "Invoice data is required for creating an invoice",
            )?;
            client.write(RESOURCE, Method::POST, RESOURCE.collection_path(), data).await?
        }
        "fakt_update_invoice" => {
            let id =
                required_id(params, "invoiceId", "Invoice ID is required for updating an invoice")?;
            let data = required_data(
                params,
                "invoiceData",
                "Invoice data is required for updating an invoice",
            )?;
            client.write(RESOURCE, Method::PUT, &format!("/invoices/{id}.json"), data).await?
        }
        "fakt_delete_invoice" => {
            let id =
                required_id(params, "invoiceId", "Invoice ID is required for deleting an invoice")?;
            client.delete(RESOURCE, &format!("/invoices/{id}.json")).await?
        }
        "fakt_send_invoice_by_email" => {
            let id = required_id(params, "invoiceId", "Invoice ID is required for sending by email")?;
            let mut query = Query::new();
            optional_query(&mut query, params, "emailTo", "email_to");
            optional_query(&mut query, params, "emailCc", "email_cc");
            query.set("email_pdf", scalar_or(params, "emailPdf", "true"));
            client
                .post_empty(RESOURCE, &format!("/invoices/{id}/send_by_email.json"), query)
                .await?
        }
        "fakt_change_invoice_status" => {
            let id = required_id(params, "invoiceId", "Invoice ID is required for changing status")?;
            let status = required_id(params, "status", "Status is required")?;
            let mut query = Query::new();
            query.set("status", status);
            client
                .post_empty(RESOURCE, &format!("/invoices/{id}/change_status.json"), query)
                .await?
        }
        "fakt_get_invoice_pdf" => {
            let id = required_id(params, "invoiceId", "Invoice ID is required for getting PDF")?;
            let bytes = client.fetch_bytes(RESOURCE, &format!("/invoices/{id}.pdf")).await?;
            json!({
                "data": BASE64.encode(&bytes),
                "contentType": "application/pdf",
            })
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}
