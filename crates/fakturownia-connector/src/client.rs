//! Minimal REST client for one Fakturownia account.
//!
//! Every operation of every resource handler funnels through [`ApiClient`]:
//! it owns the base URL, injects the `api_token` (query parameter for reads
//! and deletes, body field for writes), and turns non-2xx answers into
//! resource-labeled errors. This is the single place the "call REST, wrap
//! remote errors" convention lives.

use fakturownia_core::{Credentials, Resource};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::error::{ConnectorError, ConnectorResult};

/// Ordered query-parameter list with override semantics: setting a key that
/// is already present replaces its value, so later writers (the free-form
/// `filters` map) win over defaults.
#[derive(Debug, Clone, Default)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// HTTP client scoped to one account's base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl ApiClient {
    /// Client against `https://{domain}.fakturownia.pl`.
    pub fn new(credentials: &Credentials) -> ConnectorResult<Self> {
        Self::with_base_url(&credentials.base_url(), &credentials.api_token)
    }

    /// Client against an explicit base URL (staging, test doubles).
    pub fn with_base_url(base_url: &str, api_token: &str) -> ConnectorResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConnectorError::InvalidConfig(format!("Invalid base URL '{}': {}", base_url, e))
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_token: api_token.to_string(),
        })
    }

    /// GET returning the response body verbatim.
    pub async fn fetch(
        &self,
        resource: Resource,
        path: &str,
        query: Query,
    ) -> ConnectorResult<Value> {
        self.send(resource, Method::GET, path, self.authed(query), None).await
    }

    /// GET returning the raw response bytes (invoice PDF download).
    pub async fn fetch_bytes(&self, resource: Resource, path: &str) -> ConnectorResult<Vec<u8>> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET (binary)");
        let response = self
            .http
            .get(url)
            .query(self.authed(Query::new()).pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(remote_error(resource, status, &body));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// POST/PUT/PATCH with the entity payload wrapped under the resource's
    /// body key; the token travels in the body, as the remote API expects for
    /// writes.
    pub async fn write(
        &self,
        resource: Resource,
        method: Method,
        path: &str,
        data: Value,
    ) -> ConnectorResult<Value> {
        let mut body = Map::new();
        body.insert("api_token".to_string(), Value::String(self.api_token.clone()));
        body.insert(resource.body_key().to_string(), data);
        self.send(resource, method, path, Query::new(), Some(Value::Object(body))).await
    }

    /// POST with an empty body and everything in the query string (invoice
    /// side-effect operations: send-by-email, change-status).
    pub async fn post_empty(
        &self,
        resource: Resource,
        path: &str,
        query: Query,
    ) -> ConnectorResult<Value> {
        self.send(
            resource,
            Method::POST,
            path,
            self.authed(query),
            Some(Value::Object(Map::new())),
        )
        .await
    }

    /// DELETE with the token in the query string.
    pub async fn delete(&self, resource: Resource, path: &str) -> ConnectorResult<Value> {
        self.send(resource, Method::DELETE, path, self.authed(Query::new()), None).await
    }

    /// Prefix the query with `api_token`; handler-supplied pairs (including
    /// filter overrides) keep the last word.
    fn authed(&self, query: Query) -> Query {
        let mut authed = Query::new();
        authed.set("api_token", self.api_token.clone());
        for (key, value) in query.pairs() {
            authed.set(key, value.clone());
        }
        authed
    }

    fn endpoint(&self, path: &str) -> ConnectorResult<Url> {
        self.base_url.join(path).map_err(|e| {
            ConnectorError::InvalidConfig(format!(
                "Failed to join URL '{}' with path '{}': {}",
                self.base_url, path, e
            ))
        })
    }

    async fn send(
        &self,
        resource: Resource,
        method: Method,
        path: &str,
        query: Query,
        body: Option<Value>,
    ) -> ConnectorResult<Value> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "dispatching Fakturownia API call");

        let mut builder = self.http.request(method, url);
        if !query.is_empty() {
            builder = builder.query(query.pairs());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(remote_error(resource, status, &text));
        }
        Ok(parse_body(text))
    }
}

/// Response bodies are forwarded verbatim: empty becomes null, non-JSON text
/// is kept as a string.
fn parse_body(text: String) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

fn remote_error(resource: Resource, status: reqwest::StatusCode, body: &str) -> ConnectorError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|payload| {
            payload.get("message").and_then(Value::as_str).map(str::to_string)
        })
        .unwrap_or_else(|| format!("request failed with status code {}", status.as_u16()));

    ConnectorError::RemoteApi { label: resource.error_label(), message }
}
