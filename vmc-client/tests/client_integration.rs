// vmc-client/tests/client_integration.rs
// Drives the client against a live axum test server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;

use vmc_client::{
    ClientConfig, ClientError, DeleteFlow, DeleteState, DeleteTarget, IdentifierKind, ProductForm,
    SyncOutcome,
};

#[derive(Default)]
struct Counters {
    batch_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn catalog_router(counters: Arc<Counters>) -> Router {
    Router::new()
        .route(
            "/api/generate_batch",
            post(|State(c): State<Arc<Counters>>| async move {
                let n = c.batch_calls.fetch_add(1, Ordering::SeqCst) + 1;
                Json(json!({ "batch_number": format!("BATCH{:03}", n) }))
            }),
        )
        .route(
            "/api/template/{id}",
            get(|Path(id): Path<i64>| async move {
                match id {
                    1 => (
                        StatusCode::OK,
                        Json(json!({
                            "id": 1,
                            "name": "Flower",
                            "attributes": { "strain": "indica", "weight": "3.5g" }
                        })),
                    ),
                    2 => (
                        StatusCode::OK,
                        Json(json!({
                            "id": 2,
                            "name": "Encoded",
                            "attributes": "{\"origin\":\"local\"}"
                        })),
                    ),
                    _ => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": "Template not found" })),
                    ),
                }
            }),
        )
        .route(
            "/api/delete_product/{id}",
            delete(
                |State(c): State<Arc<Counters>>, Path(id): Path<String>| async move {
                    c.delete_calls.fetch_add(1, Ordering::SeqCst);
                    if id == "good" {
                        (StatusCode::OK, Json(json!({})))
                    } else {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({ "error": "Cannot delete product" })),
                        )
                    }
                },
            ),
        )
        .route(
            "/api/delete_coa/{id}",
            delete(
                |State(c): State<Arc<Counters>>, Path(id): Path<String>| async move {
                    c.delete_calls.fetch_add(1, Ordering::SeqCst);
                    if id == "good" {
                        (StatusCode::OK, Json(json!({})))
                    } else {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({ "error": "Error deleting COA" })),
                        )
                    }
                },
            ),
        )
        .with_state(counters)
}

async fn client_for(counters: Arc<Counters>) -> vmc_client::ApiClient {
    let base_url = serve(catalog_router(counters)).await;
    ClientConfig::new(base_url).with_timeout(5).build_client()
}

#[tokio::test]
async fn test_generate_batch() {
    let counters = Arc::new(Counters::default());
    let client = client_for(counters.clone()).await;

    let batch = client.generate_batch().await.unwrap();
    assert_eq!(batch, "BATCH001");
    assert_eq!(counters.batch_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_batch_auto_init_fires_once() {
    let counters = Arc::new(Counters::default());
    let client = client_for(counters.clone()).await;

    let mut form = ProductForm::new();
    form.init(&client).await;
    assert_eq!(form.batch().value(), "BATCH001");

    // Re-running init must not issue a second automatic request
    form.init(&client).await;
    assert_eq!(counters.batch_calls.load(Ordering::SeqCst), 1);

    // A manual regenerate issues exactly one more
    form.regenerate_batch(&client).await;
    assert_eq!(form.batch().value(), "BATCH002");
    assert_eq!(counters.batch_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_batch_init_skipped_when_prefilled_or_unlocked() {
    let counters = Arc::new(Counters::default());
    let client = client_for(counters.clone()).await;

    let mut form = ProductForm::for_product("EXISTING1", "", "");
    form.init(&client).await;
    assert_eq!(form.batch().value(), "EXISTING1");
    assert_eq!(counters.batch_calls.load(Ordering::SeqCst), 0);

    let mut form = ProductForm::new();
    form.set_locked(IdentifierKind::Batch, false);
    form.init(&client).await;
    form.regenerate_batch(&client).await;
    assert_eq!(counters.batch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_template_fetch_object_and_encoded() {
    let client = client_for(Arc::new(Counters::default())).await;

    let template = client.fetch_template(1).await.unwrap();
    assert_eq!(template.name.as_deref(), Some("Flower"));
    assert_eq!(
        template.attributes.entries(),
        &[
            ("strain".to_string(), "indica".to_string()),
            ("weight".to_string(), "3.5g".to_string()),
        ]
    );

    let template = client.fetch_template(2).await.unwrap();
    assert_eq!(
        template.attributes.entries(),
        &[("origin".to_string(), "local".to_string())]
    );
}

#[tokio::test]
async fn test_template_selection_applies_rows() {
    let client = client_for(Arc::new(Counters::default())).await;

    let mut form = ProductForm::new();
    form.select_template(&client, Some(1)).await;
    assert_eq!(form.attributes().len(), 2);
    assert!(form.template_error().is_none());

    // Deselecting clears the rows
    form.select_template(&client, None).await;
    assert!(form.attributes().is_empty());
}

#[tokio::test]
async fn test_template_error_leaves_rows_untouched() {
    let client = client_for(Arc::new(Counters::default())).await;

    let mut form = ProductForm::new();
    form.select_template(&client, Some(1)).await;
    assert_eq!(form.attributes().len(), 2);

    form.select_template(&client, Some(99)).await;
    assert_eq!(form.attributes().len(), 2);
    assert_eq!(form.template_error(), Some("Template not found"));
}

#[tokio::test]
async fn test_delete_product_success() {
    let counters = Arc::new(Counters::default());
    let client = client_for(counters.clone()).await;

    let mut flow = DeleteFlow::new();
    flow.request(DeleteTarget::Product("good".to_string()));
    let state = flow.run(&client).await;
    assert_eq!(*state, DeleteState::Succeeded);
    assert!(!flow.confirm_enabled());
    assert_eq!(counters.delete_calls.load(Ordering::SeqCst), 1);

    // A further confirm attempt issues no call
    flow.run(&client).await;
    assert_eq!(counters.delete_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_delete_coa_failure_then_retry() {
    let counters = Arc::new(Counters::default());
    let client = client_for(counters.clone()).await;

    let mut flow = DeleteFlow::new();
    flow.request(DeleteTarget::Coa("bad".to_string()));

    let state = flow.run(&client).await.clone();
    assert_eq!(
        state,
        DeleteState::Failed {
            message: "Error deleting COA".to_string()
        }
    );
    assert!(flow.confirm_enabled());
    assert_eq!(counters.delete_calls.load(Ordering::SeqCst), 1);

    // Manual retry issues exactly one more call
    flow.run(&client).await;
    assert_eq!(counters.delete_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_backend_error_maps_to_client_error() {
    let client = client_for(Arc::new(Counters::default())).await;

    let err = client.delete_product("bad").await.unwrap_err();
    match err {
        ClientError::Backend {
            status,
            message,
            needs_setup,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Cannot delete product");
            assert!(!needs_setup);
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_network_error() {
    // Nothing is listening on this port
    let client = ClientConfig::new("http://127.0.0.1:1")
        .with_timeout(1)
        .build_client();
    let err = client.generate_batch().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_sync_to_square_completed() {
    let router = Router::new().route(
        "/api/sync_to_square",
        get(|| async { Json(json!({ "synced": 3, "failed": 0, "warnings": ["w1"] })) }),
    );
    let client = ClientConfig::new(serve(router).await).build_client();

    match client.sync_to_square_outcome().await {
        SyncOutcome::Completed(report) => {
            assert_eq!(report.synced, 3);
            assert_eq!(report.warnings, vec!["w1".to_string()]);
        }
        other => panic!("expected completed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sync_to_square_empty_body() {
    let router = Router::new().route("/api/sync_to_square", get(|| async { "" }));
    let client = ClientConfig::new(serve(router).await).build_client();

    let report = client.sync_to_square().await.unwrap();
    assert_eq!(report.synced, 0);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn test_sync_to_square_needs_setup() {
    let router = Router::new().route(
        "/api/sync_to_square",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Square credentials are not configured or invalid.",
                    "needs_setup": true
                })),
            )
        }),
    );
    let client = ClientConfig::new(serve(router).await).build_client();

    match client.sync_to_square_outcome().await {
        SyncOutcome::NeedsSetup(message) => {
            assert!(message.contains("Square credentials"));
        }
        other => panic!("expected needs_setup, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sync_to_square_plain_failure() {
    let router = Router::new().route(
        "/api/sync_to_square",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Square API authentication failed" })),
            )
        }),
    );
    let client = ClientConfig::new(serve(router).await).build_client();

    match client.sync_to_square_outcome().await {
        SyncOutcome::Failed(message) => {
            assert_eq!(message, "Square API authentication failed");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_template_response() {
    let router = Router::new().route(
        "/api/template/{id}",
        get(|| async { Json(json!({ "unexpected": true })) }),
    );
    let client = ClientConfig::new(serve(router).await).build_client();

    let err = client.fetch_template(5).await.unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}
