use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use csgo_api::{
    config::Config,
    infrastructure::{
        cache::snapshot_cache::CachePolicy,
        repositories::json_file_repository::JsonFileRepository,
    },
    presentation::http::{routes::create_app, state::AppState},
};
use serde::de::DeserializeOwned;
use std::{path::PathBuf, sync::Arc};
use tower::ServiceExt;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/api")
}

fn build_config(cache_policy: CachePolicy) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_dir: fixtures_dir(),
        cache_policy,
        preload_data: false,
    }
}

pub fn spawn_app_with(cache_policy: CachePolicy) -> Router {
    let config = build_config(cache_policy);
    let repository = Arc::new(JsonFileRepository::new(
        config.data_dir.clone(),
        config.cache_policy,
    ));

    let state = AppState {
        catalog: repository,
    };
    create_app(state)
}

pub fn spawn_app() -> Router {
    spawn_app_with(CachePolicy::Snapshot)
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn fixture_json<T: DeserializeOwned>(relative: &str) -> T {
    let raw = std::fs::read(fixtures_dir().join(relative)).expect("missing fixture");
    serde_json::from_slice(&raw).expect("fixture is not valid json")
}

pub fn names(items: &serde_json::Value) -> Vec<String> {
    items
        .as_array()
        .expect("expected a json array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
