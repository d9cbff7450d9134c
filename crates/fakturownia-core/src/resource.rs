//! The closed set of Fakturownia resource families this gateway speaks for.

/// One external API domain-object family.
///
/// Warehouse documents are a separate entry because they carry their own
/// collection path and body key, even though their methods live in the
/// warehouses handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Categories,
    Clients,
    Departments,
    Invoices,
    Payments,
    Products,
    Warehouses,
    WarehouseDocuments,
}

impl Resource {
    /// Collection path for list/create operations.
    pub fn collection_path(&self) -> &'static str {
        match self {
            Resource::Categories => "/categories.json",
            Resource::Clients => "/clients.json",
            Resource::Departments => "/departments.json",
            Resource::Invoices => "/invoices.json",
            Resource::Payments => "/banking/payments.json",
            Resource::Products => "/products.json",
            Resource::Warehouses => "/warehouses.json",
            Resource::WarehouseDocuments => "/warehouse_documents.json",
        }
    }

    /// Key the entity payload is wrapped under in create/update bodies.
    pub fn body_key(&self) -> &'static str {
        match self {
            Resource::Categories => "category",
            Resource::Clients => "client",
            Resource::Departments => "department",
            Resource::Invoices => "invoice",
            Resource::Payments => "banking_payment",
            Resource::Products => "product",
            Resource::Warehouses => "warehouse",
            Resource::WarehouseDocuments => "warehouse_document",
        }
    }

    /// Prefix used when relaying a structured remote error, e.g.
    /// `Category API error: ...`. Warehouse documents report under the
    /// warehouse label because they share that handler.
    pub fn error_label(&self) -> &'static str {
        match self {
            Resource::Categories => "Category",
            Resource::Clients => "Client",
            Resource::Departments => "Department",
            Resource::Invoices => "Invoice",
            Resource::Payments => "Payment",
            Resource::Products => "Product",
            Resource::Warehouses | Resource::WarehouseDocuments => "Warehouse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payments_live_under_banking() {
        assert_eq!(Resource::Payments.collection_path(), "/banking/payments.json");
        assert_eq!(Resource::Payments.body_key(), "banking_payment");
    }

    #[test]
    fn warehouse_documents_report_as_warehouse_errors() {
        assert_eq!(Resource::WarehouseDocuments.error_label(), "Warehouse");
        assert_eq!(Resource::WarehouseDocuments.body_key(), "warehouse_document");
    }
}
