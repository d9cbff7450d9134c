//! End-to-end tests: drive the axum router with in-memory requests and a
//! mocked Fakturownia remote.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use fakturownia_core::Config;
use fakturownia_mcp::{app, AppState};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

fn gateway(server: &MockServer) -> Router {
    app(AppState::new(Config {
        domain: "acme".to_string(),
        api_token: "tok".to_string(),
        api_base: Some(server.base_url()),
    }))
}

fn gateway_unconfigured(server: &MockServer) -> Router {
    app(AppState::new(Config {
        domain: String::new(),
        api_token: String::new(),
        api_base: Some(server.base_url()),
    }))
}

async fn post_raw(router: Router, path: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_rpc(router: Router, path: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, path, &body.to_string()).await
}

fn tools_call(id: i64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments},
    })
}

#[tokio::test]
async fn tools_list_counts_match_the_catalogs() {
    let server = MockServer::start_async().await;

    let (status, body) = post_rpc(
        gateway(&server),
        "/categories",
        json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
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

    let (_, body) = post_rpc(
        gateway(&server),
        "/products",
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    )
    .await;
    assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 4);

    let (_, body) = post_rpc(
        gateway(&server),
        "/fakturownia",
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/list"}),
    )
    .await;
    assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 42);
}

#[tokio::test]
async fn malformed_bodies_yield_parse_errors_with_the_status_split() {
    let server = MockServer::start_async().await;

    // Most endpoints answer HTTP 200 with the error envelope.
    let (status, body) = post_raw(gateway(&server), "/categories", "{not json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], json!(-32700));
    assert_eq!(body["error"]["message"], json!("Parse error"));
    assert_eq!(body["id"], Value::Null);

    // The invoices endpoint alone answers HTTP 400.
    let (status, body) = post_raw(gateway(&server), "/invoices", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!(-32700));
    assert_eq!(body["id"], Value::Null);
}

#[tokio::test]
async fn create_category_round_trips_through_mcp_content() {
    let server = MockServer::start_async().await;
    let remote = json!({"id": 7, "name": "X"});
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/categories.json")
                .json_body(json!({"api_token": "tok", "category": {"name": "X"}}));
            then.status(200).json_body(remote.clone());
        })
        .await;

    let (status, body) = post_rpc(
        gateway(&server),
        "/categories",
        tools_call(9, "fakt_create_category", json!({"categoryData": {"name": "X"}})),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(9));
    let content = &body["result"]["content"][0];
    assert_eq!(content["type"], json!("text"));
    assert_eq!(content["text"], json!(serde_json::to_string_pretty(&remote).unwrap()));
}

#[tokio::test]
async fn configured_credentials_win_over_call_arguments() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/categories.json").query_param("api_token", "tok");
            then.status(200).json_body(json!([]));
        })
        .await;

    let (_, body) = post_rpc(
        gateway(&server),
        "/categories",
        tools_call(
            1,
            "fakt_get_categories",
            json!({"domain": "other", "api_token": "bad"}),
        ),
    )
    .await;

    mock.assert_async().await;
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn missing_credentials_fail_before_any_network_call() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/categories.json");
            then.status(200).json_body(json!([]));
        })
        .await;

    let (status, body) = post_rpc(
        gateway_unconfigured(&server),
        "/categories",
        tools_call(4, "fakt_get_categories", json!({"api_token": "tok"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], json!(-32000));
    assert_eq!(body["error"]["message"], json!("Domain and API token are required"));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn foreign_tools_are_unsupported_per_endpoint() {
    let server = MockServer::start_async().await;
    let (status, body) = post_rpc(
        gateway(&server),
        "/categories",
        tools_call(5, "fakt_get_invoices", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(5));
    assert_eq!(body["error"]["code"], json!(-32000));
    assert_eq!(
        body["error"]["message"],
        json!("Categories method not supported: fakt_get_invoices")
    );
}

#[tokio::test]
async fn initialize_is_invoices_only() {
    let server = MockServer::start_async().await;

    let (status, body) = post_rpc(
        gateway(&server),
        "/invoices",
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["protocolVersion"], json!("2024-11-05"));
    assert_eq!(body["result"]["capabilities"], json!({"tools": {}}));
    assert_eq!(
        body["result"]["serverInfo"]["name"],
        json!("Fakturownia Invoices MCP Server")
    );

    let (status, body) = post_rpc(
        gateway(&server),
        "/categories",
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Only tools/call method is supported for categories endpoint")
    );
}

#[tokio::test]
async fn invoices_keep_the_legacy_direct_dispatch() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/invoices/5.json").query_param("api_token", "tok");
            then.status(200).json_body(json!({"invoice": {"id": 5}}));
        })
        .await;

    let (status, body) = post_rpc(
        gateway(&server),
        "/invoices",
        json!({"jsonrpc": "2.0", "id": 11, "method": "fakt_get_invoice", "params": {"invoiceId": 5}}),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(11));
    // Raw result, not wrapped in MCP content.
    assert_eq!(body["result"], json!({"invoice": {"id": 5}}));
}

#[tokio::test]
async fn legacy_failures_report_a_null_id() {
    let server = MockServer::start_async().await;
    let (status, body) = post_rpc(
        gateway(&server),
        "/invoices",
        json!({"jsonrpc": "2.0", "id": 12, "method": "fakt_unknown", "params": {}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["error"]["code"], json!(-32000));
    assert_eq!(body["error"]["message"], json!("Invoice method not supported: fakt_unknown"));
}

#[tokio::test]
async fn the_aggregator_routes_across_all_resources() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/departments.json").query_param("api_token", "tok");
            then.status(200).json_body(json!([{"id": 1}]));
        })
        .await;

    let (_, body) = post_rpc(
        gateway(&server),
        "/fakturownia",
        tools_call(2, "fakt_get_departments", json!({})),
    )
    .await;
    mock.assert_async().await;
    assert_eq!(body["result"]["content"][0]["type"], json!("text"));

    let (_, body) = post_rpc(
        gateway(&server),
        "/fakturownia",
        tools_call(3, "fakt_nope", json!({})),
    )
    .await;
    assert_eq!(body["error"]["message"], json!("Unknown method: fakt_nope"));
}

#[tokio::test]
async fn get_serves_the_identity_document() {
    let server = MockServer::start_async().await;
    let response = gateway(&server)
        .oneshot(Request::builder().uri("/payments").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["name"], json!("Fakturownia Payments MCP Server"));
    assert_eq!(body["status"], json!("running"));
    assert_eq!(body["supportedMethods"].as_array().unwrap().len(), 5);
    assert!(body.get("endpoints").is_none());

    // The invoices endpoint also documents its direct POST usage.
    let response = gateway(&server)
        .oneshot(Request::builder().uri("/invoices").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["endpoints"]["mcp"], json!("/invoices (POST with MCP protocol)"));
}

#[tokio::test]
async fn preflight_gets_an_empty_ok_with_cors_headers() {
    let server = MockServer::start_async().await;
    let response = gateway(&server)
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/clients")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn invoice_pdf_results_decode_back_to_the_original_bytes() {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;

    let original = b"%PDF-1.7 binary\x00\xff payload";
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/invoices/31.pdf").query_param("api_token", "tok");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(original.as_slice());
        })
        .await;

    let (_, body) = post_rpc(
        gateway(&server),
        "/invoices",
        tools_call(8, "fakt_get_invoice_pdf", json!({"invoiceId": 31})),
    )
    .await;

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    let inner: Value = serde_json::from_str(text).unwrap();
    assert_eq!(inner["contentType"], json!("application/pdf"));
    assert_eq!(
        BASE64.decode(inner["data"].as_str().unwrap()).unwrap(),
        original
    );
}

#[tokio::test]
async fn repeated_gets_are_byte_identical() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/categories/5.json");
            then.status(200).json_body(json!({"category": {"id": 5, "name": "Biuro"}}));
        })
        .await;

    let call = tools_call(1, "fakt_get_category", json!({"categoryId": 5}));
    let router = gateway(&server);
    let first = post_raw(router.clone(), "/categories", &call.to_string()).await;
    let second = post_raw(router, "/categories", &call.to_string()).await;

    assert_eq!(
        serde_json::to_vec(&first.1).unwrap(),
        serde_json::to_vec(&second.1).unwrap()
    );
}
