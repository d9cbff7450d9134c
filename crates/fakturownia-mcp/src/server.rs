//! Axum application wiring: one route per resource family plus the
//! aggregator, behind the fixed permissive CORS policy.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::Json;
use axum::routing::{get, MethodRouter};
use axum::Router;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use fakturownia_connector::ApiClient;
use fakturownia_core::Config;

use crate::endpoint::{self, Endpoint};
use crate::error::McpResult;

/// Shared application state: the process-wide configuration, read once at
/// startup and passed explicitly from then on.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Resolve credentials against the call's arguments and build the REST
    /// client for this single request.
    pub(crate) fn client(&self, arguments: &Value) -> McpResult<ApiClient> {
        let credentials = self.config.resolve_credentials(arguments)?;
        let client = match &self.config.api_base {
            Some(base) => ApiClient::with_base_url(base, &credentials.api_token)?,
            None => ApiClient::new(&credentials)?,
        };
        Ok(client)
    }
}

/// Build the gateway router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/categories", endpoint_routes(&endpoint::CATEGORIES))
        .route("/clients", endpoint_routes(&endpoint::CLIENTS))
        .route("/departments", endpoint_routes(&endpoint::DEPARTMENTS))
        .route("/invoices", endpoint_routes(&endpoint::INVOICES))
        .route("/payments", endpoint_routes(&endpoint::PAYMENTS))
        .route("/products", endpoint_routes(&endpoint::PRODUCTS))
        .route("/warehouses", endpoint_routes(&endpoint::WAREHOUSES))
        .route("/fakturownia", endpoint_routes(&endpoint::AGGREGATOR))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn endpoint_routes(endpoint: &'static Endpoint) -> MethodRouter<AppState> {
    get(move || async move { Json(endpoint::info_document(endpoint)) })
        .post(move |State(state): State<AppState>, body: Bytes| async move {
            endpoint::handle_rpc(endpoint, &state, &body).await
        })
        .options(|| async { StatusCode::OK })
}

/// The fixed permissive policy every endpoint answers with: wildcard origin,
/// `Content-Type, Authorization`, `GET, POST, OPTIONS`.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
