use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::streams::adapters::outbound::json_file_store::JsonFileStreamStore;
use crate::modules::streams::core::ports::StreamStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::streams::NewStreamBuilder;

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_default())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn creates_reads_and_deletes_a_stream_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(
        JsonFileStreamStore::open(dir.path().join("store.json"))
            .await
            .unwrap(),
    );
    let app = router(AppState::new(store.clone()), dir.path());

    let created = store
        .create(NewStreamBuilder::new().width(10.0).height(20.0).build())
        .await
        .unwrap();
    assert_eq!(created.id.len(), 20);
    assert!(created.id.chars().all(|c| c.is_ascii_alphanumeric()));

    let uri = format!("/api/streams/{}", created.id);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "error": false,
            "content": { "id": created.id, "width": 10, "height": 20, "elements": [] }
        })
    );

    let (status, _) = send(&app, "PUT", &uri, Some(r#"{"width":50}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", &format!("/v1/streams/{}", created.id), None).await;
    assert_eq!(body["content"]["width"], json!(50));
    assert_eq!(body["content"]["height"], json!(20));

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "error": false, "content": { "message": "Stream deleted" } })
    );

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(true));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(store.array().await.unwrap().is_empty());
}

#[tokio::test]
async fn reports_a_corrupt_storage_file_as_500() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let store = Arc::new(JsonFileStreamStore::open(&path).await.unwrap());
    let app = router(AppState::new(store), dir.path());
    std::fs::write(&path, "not json").unwrap();

    let (status, body) = send(&app, "GET", "/api/streams/anything", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!(true));
    assert!(
        body["content"]["message"]
            .as_str()
            .unwrap()
            .starts_with("malformed storage file")
    );
}
