//! Tool-argument extraction shared by the resource method handlers.

use serde_json::Value;

use crate::client::Query;
use crate::error::{ConnectorError, ConnectorResult};

/// Required identifier. String and numeric JSON values are both accepted
/// (callers routinely send ids either way); anything absent, null, or empty
/// fails with the operation's own message.
pub(crate) fn required_id(params: &Value, key: &str, message: &str) -> ConnectorResult<String> {
    scalar(params.get(key))
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConnectorError::InvalidParams(message.to_string()))
}

/// Required entity payload for create/update bodies; forwarded opaquely.
pub(crate) fn required_data(params: &Value, key: &str, message: &str) -> ConnectorResult<Value> {
    match params.get(key) {
        None | Some(Value::Null) => Err(ConnectorError::InvalidParams(message.to_string())),
        Some(value) => Ok(value.clone()),
    }
}

/// Render a JSON scalar as a query-string value.
pub(crate) fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Scalar argument with a default.
pub(crate) fn scalar_or(params: &Value, key: &str, default: &str) -> String {
    scalar(params.get(key)).unwrap_or_else(|| default.to_string())
}

/// Copy an optional argument into the query under `name` when present.
pub(crate) fn optional_query(query: &mut Query, params: &Value, key: &str, name: &str) {
    if let Some(value) = scalar(params.get(key)) {
        query.set(name, value);
    }
}

/// Merge the free-form `filters` map into the query; filter keys override
/// anything already set.
pub(crate) fn apply_filters(query: &mut Query, params: &Value) {
    if let Some(filters) = params.get("filters").and_then(Value::as_object) {
        for (key, value) in filters {
            if let Some(rendered) = scalar(Some(value)) {
                query.set(key, rendered);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_id_accepts_numbers_and_strings() {
        let params = json!({"categoryId": 42});
        assert_eq!(required_id(&params, "categoryId", "Category ID is required").unwrap(), "42");

        let params = json!({"categoryId": "abc"});
        assert_eq!(required_id(&params, "categoryId", "Category ID is required").unwrap(), "abc");
    }

    #[test]
    fn required_id_names_the_operation_when_missing() {
        for params in [json!({}), json!({"categoryId": null}), json!({"categoryId": ""})] {
            let err = required_id(&params, "categoryId", "Category ID is required").unwrap_err();
            assert_eq!(err.to_string(), "Category ID is required");
        }
    }

    #[test]
    fn required_data_rejects_null_but_keeps_any_shape() {
        let message = "Category data is required for creating a category";
        let err = required_data(&json!({}), "categoryData", message).unwrap_err();
        assert_eq!(err.to_string(), message);

        let data = required_data(&json!({"categoryData": {"name": "X"}}), "categoryData", message)
            .unwrap();
        assert_eq!(data, json!({"name": "X"}));
    }

    #[test]
    fn filters_override_defaults() {
        let mut query = Query::new();
        query.set("page", "1");
        apply_filters(&mut query, &json!({"filters": {"page": 3, "kind": "vat"}}));
        assert!(query.pairs().contains(&("page".to_string(), "3".to_string())));
        assert!(query.pairs().contains(&("kind".to_string(), "vat".to_string())));
    }

    #[test]
    fn optional_query_skips_missing_and_null() {
        let mut query = Query::new();
        optional_query(&mut query, &json!({"emailCc": null}), "emailCc", "email_cc");
        optional_query(&mut query, &json!({}), "emailTo", "email_to");
        assert!(query.is_empty());

        optional_query(&mut query, &json!({"emailTo": "a@b.pl"}), "emailTo", "email_to");
        assert_eq!(query.pairs(), &[("email_to".to_string(), "a@b.pl".to_string())]);
    }
}
