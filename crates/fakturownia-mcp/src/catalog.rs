//! Static tool catalogs, one per endpoint.
//!
//! Names, descriptions and input schemas are the wire-visible contract of
//! `tools/list`; the schemas keep the loose shape existing clients depend
//! on, including the non-standard `required: true` annotations inside
//! property objects.

use serde_json::{json, Map, Value};

use crate::mcp::Tool;

/// Per-resource naming used to stamp out the uniform CRUD tool set.
struct EntityTools {
    list: &'static str,
    get: &'static str,
    create: &'static str,
    update: &'static str,
    delete: Option<&'static str>,
    singular: &'static str,
    plural: &'static str,
    /// Article in the delete description ("Delete a category" / "an invoice").
    article: &'static str,
    id_key: &'static str,
    id_label: &'static str,
    data_key: &'static str,
    data_label: &'static str,
    updated_data_label: &'static str,
}

const CATEGORY: EntityTools = EntityTools {
    list: "fakt_get_categories",
    get: "fakt_get_category",
    create: "fakt_create_category",
    update: "fakt_update_category",
    delete: Some("fakt_delete_category"),
    singular: "category",
    plural: "categories",
    article: "a",
    id_key: "categoryId",
    id_label: "Category ID",
    data_key: "categoryData",
    data_label: "Category data",
    updated_data_label: "Updated category data",
};

const CLIENT: EntityTools = EntityTools {
    list: "fakt_get_clients",
    get: "fakt_get_client",
    create: "fakt_create_client",
    update: "fakt_update_client",
    delete: Some("fakt_delete_client"),
    singular: "client",
    plural: "clients",
    article: "a",
    id_key: "clientId",
    id_label: "Client ID",
    data_key: "clientData",
    data_label: "Client data",
    updated_data_label: "Updated client data",
};

const DEPARTMENT: EntityTools = EntityTools {
    list: "fakt_get_departments",
    get: "fakt_get_department",
    create: "fakt_create_department",
    update: "fakt_update_department",
    delete: Some("fakt_delete_department"),
    singular: "department",
    plural: "departments",
    article: "a",
    id_key: "departmentId",
    id_label: "Department ID",
    data_key: "departmentData",
    data_label: "Department data",
    updated_data_label: "Updated department data",
};

const INVOICE: EntityTools = EntityTools {
    list: "fakt_get_invoices",
    get: "fakt_get_invoice",
    create: "fakt_create_invoice",
    update: "fakt_update_invoice",
    delete: Some("fakt_delete_invoice"),
    singular: "invoice",
    plural: "invoices",
    article: "an",
    id_key: "invoiceId",
    id_label: "Invoice ID",
    data_key: "invoiceData",
    data_label: "Invoice data",
    updated_data_label: "Updated invoice data",
};

const PAYMENT: EntityTools = EntityTools {
    list: "fakt_get_payments",
    get: "fakt_get_payment",
    create: "fakt_create_payment",
    update: "fakt_update_payment",
    delete: Some("fakt_delete_payment"),
    singular: "payment",
    plural: "payments",
    article: "a",
    id_key: "paymentId",
    id_label: "Payment ID",
    data_key: "paymentData",
    data_label: "Payment data",
    updated_data_label: "Updated payment data",
};

// No delete: the external API offers none for products.
const PRODUCT: EntityTools = EntityTools {
    list: "fakt_get_products",
    get: "fakt_get_product",
    create: "fakt_create_product",
    update: "fakt_update_product",
    delete: None,
    singular: "product",
    plural: "products",
    article: "a",
    id_key: "productId",
    id_label: "Product ID",
    data_key: "productData",
    data_label: "Product data",
    updated_data_label: "Updated product data",
};

const WAREHOUSE: EntityTools = EntityTools {
    list: "fakt_get_warehouses",
    get: "fakt_get_warehouse",
    create: "fakt_create_warehouse",
    update: "fakt_update_warehouse",
    delete: Some("fakt_delete_warehouse"),
    singular: "warehouse",
    plural: "warehouses",
    article: "a",
    id_key: "warehouseId",
    id_label: "Warehouse ID",
    data_key: "warehouseData",
    data_label: "Warehouse data",
    updated_data_label: "Updated warehouse data",
};

const WAREHOUSE_DOCUMENT: EntityTools = EntityTools {
    list: "fakt_get_warehouse_documents",
    get: "fakt_get_warehouse_document",
    create: "fakt_create_warehouse_document",
    update: "fakt_update_warehouse_document",
    delete: Some("fakt_delete_warehouse_document"),
    singular: "warehouse document",
    plural: "warehouse documents",
    article: "a",
    id_key: "documentId",
    id_label: "Document ID",
    data_key: "documentData",
    data_label: "Document data",
    updated_data_label: "Updated document data",
};

pub fn categories() -> Vec<Tool> {
    entity_tools(&CATEGORY)
}

pub fn clients() -> Vec<Tool> {
    entity_tools(&CLIENT)
}

pub fn departments() -> Vec<Tool> {
    entity_tools(&DEPARTMENT)
}

pub fn payments() -> Vec<Tool> {
    entity_tools(&PAYMENT)
}

pub fn products() -> Vec<Tool> {
    entity_tools(&PRODUCT)
}

pub fn warehouses() -> Vec<Tool> {
    let mut tools = entity_tools(&WAREHOUSE);
    tools.extend(entity_tools(&WAREHOUSE_DOCUMENT));
    tools
}

pub fn invoices() -> Vec<Tool> {
    let mut tools = entity_tools(&INVOICE);

    // The invoice list takes more than plain pagination.
    tools[0].input_schema = object_schema(
        vec![
            ("page", number_prop("Page number")),
            ("perPage", number_prop("Items per page")),
            ("period", string_prop("Time period filter")),
            ("includePositions", boolean_prop("Include invoice positions")),
        ],
        &[],
    );

    tools.push(Tool {
        name: "fakt_send_invoice_by_email".to_string(),
        description: "Send invoice by email".to_string(),
        input_schema: object_schema(
            vec![
                ("invoiceId", required_number_prop("Invoice ID")),
                ("emailTo", string_prop("Recipient email")),
                ("emailCc", string_prop("CC email")),
                ("emailPdf", boolean_prop("Include PDF attachment")),
            ],
            &["invoiceId"],
        ),
    });
    tools.push(Tool {
        name: "fakt_change_invoice_status".to_string(),
        description: "Change invoice status".to_string(),
        input_schema: object_schema(
            vec![
                ("invoiceId", required_number_prop("Invoice ID")),
                ("status", required_string_prop("New status")),
            ],
            &["invoiceId", "status"],
        ),
    });
    tools.push(Tool {
        name: "fakt_get_invoice_pdf".to_string(),
        description: "Get invoice as PDF".to_string(),
        input_schema: object_schema(
            vec![("invoiceId", required_number_prop("Invoice ID"))],
            &["invoiceId"],
        ),
    });

    tools
}

/// Every tool of every resource, in router order.
pub fn all() -> Vec<Tool> {
    let mut tools = invoices();
    tools.extend(clients());
    tools.extend(products());
    tools.extend(payments());
    tools.extend(categories());
    tools.extend(warehouses());
    tools.extend(departments());
    tools
}

fn entity_tools(entity: &EntityTools) -> Vec<Tool> {
    let mut tools = vec![
        Tool {
            name: entity.list.to_string(),
            description: format!("Get list of {} from Fakturownia", entity.plural),
            input_schema: object_schema(
                vec![
                    ("page", number_prop("Page number")),
                    ("perPage", number_prop("Items per page")),
                ],
                &[],
            ),
        },
        Tool {
            name: entity.get.to_string(),
            description: format!("Get a specific {} by ID", entity.singular),
            input_schema: object_schema(
                vec![(entity.id_key, required_number_prop(entity.id_label))],
                &[entity.id_key],
            ),
        },
        Tool {
            name: entity.create.to_string(),
            description: format!("Create a new {}", entity.singular),
            input_schema: object_schema(
                vec![(entity.data_key, required_object_prop(entity.data_label))],
                &[entity.data_key],
            ),
        },
        Tool {
            name: entity.update.to_string(),
            description: format!("Update an existing {}", entity.singular),
            input_schema: object_schema(
                vec![
                    (entity.id_key, required_number_prop(entity.id_label)),
                    (entity.data_key, required_object_prop(entity.updated_data_label)),
                ],
                &[entity.id_key, entity.data_key],
            ),
        },
    ];

    if let Some(delete) = entity.delete {
        tools.push(Tool {
            name: delete.to_string(),
            description: format!("Delete {} {}", entity.article, entity.singular),
            input_schema: object_schema(
                vec![(entity.id_key, required_number_prop(entity.id_label))],
                &[entity.id_key],
            ),
        });
    }

    tools
}

fn object_schema(properties: Vec<(&str, Value)>, required: &[&str]) -> Value {
    let mut props = Map::new();
    for (key, value) in properties {
        props.insert(key.to_string(), value);
    }
    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(props));
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    Value::Object(schema)
}

fn number_prop(description: &str) -> Value {
    json!({"type": "number", "description": description})
}

fn required_number_prop(description: &str) -> Value {
    json!({"type": "number", "description": description, "required": true})
}

fn string_prop(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

fn required_string_prop(description: &str) -> Value {
    json!({"type": "string", "description": description, "required": true})
}

fn boolean_prop(description: &str) -> Value {
    json!({"type": "boolean", "description": description})
}

fn required_object_prop(description: &str) -> Value {
    json!({"type": "object", "description": description, "required": true})
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn categories_catalog_lists_exactly_the_five_tools() {
        let names: Vec<String> = categories().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "fakt_get_categories",
                "fakt_get_category",
                "fakt_create_category",
                "fakt_update_category",
                "fakt_delete_category",
            ]
        );
    }

    #[test]
    fn products_have_no_delete_tool() {
        let names: Vec<String> = products().into_iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 4);
        assert!(!names.iter().any(|n| n.contains("delete")));
    }

    #[test]
    fn invoices_carry_the_three_special_operations() {
        let names: Vec<String> = invoices().into_iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 8);
        for name in
            ["fakt_send_invoice_by_email", "fakt_change_invoice_status", "fakt_get_invoice_pdf"]
        {
            assert!(names.contains(&name.to_string()), "missing {name}");
        }
    }

    #[test]
    fn warehouses_cover_both_resource_kinds() {
        let names: Vec<String> = warehouses().into_iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"fakt_get_warehouse_documents".to_string()));
    }

    #[test]
    fn tool_names_are_globally_unique() {
        // The router depends on this invariant.
        let tools = all();
        assert_eq!(tools.len(), 42);
        let unique: HashSet<String> = tools.into_iter().map(|t| t.name).collect();
        assert_eq!(unique.len(), 42);
    }

    #[test]
    fn required_ids_are_marked_in_the_schema() {
        let get_category = &categories()[1];
        assert_eq!(get_category.input_schema["required"], json!(["categoryId"]));
        assert_eq!(
            get_category.input_schema["properties"]["categoryId"]["description"],
            json!("Category ID")
        );
    }
}
