use super::helpers::{expect_status, get, names, read_json, spawn_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn search_requires_query() {
    let app = spawn_app();

    let res = expect_status(get(&app, "/api/en/search").await, StatusCode::BAD_REQUEST).await;
    let body: Value = read_json(res).await;
    assert_eq!(body, json!({ "error": "Search query is required" }));
}

#[tokio::test]
async fn search_is_case_insensitive_across_entities() {
    let app = spawn_app();

    let res = expect_status(get(&app, "/api/en/search?q=AK").await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(names(&body["skins"]), vec!["AK-47 | Redline"]);
    assert_eq!(names(&body["stickers"]), vec!["Sticker | AK-47 Enthusiast"]);
    assert_eq!(body["collections"], json!([]));
    assert_eq!(body["crates"], json!([]));
}

#[tokio::test]
async fn search_matches_skin_descriptions() {
    let app = spawn_app();

    let res = expect_status(get(&app, "/api/en/search?q=HYDROGRAPHIC").await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(names(&body["skins"]), vec!["AK-47 | Redline"]);
}

#[tokio::test]
async fn search_spans_collections_and_crates() {
    let app = spawn_app();

    let res = expect_status(get(&app, "/api/en/search?q=phoenix").await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["skins"], json!([]));
    assert_eq!(names(&body["collections"]), vec!["The Phoenix Collection"]);
    assert_eq!(names(&body["crates"]), vec!["Operation Phoenix Weapon Case"]);
}

#[tokio::test]
async fn empty_query_returns_everything() {
    let app = spawn_app();

    let res = expect_status(get(&app, "/api/en/search?q=").await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["skins"].as_array().unwrap().len(), 4);
    assert_eq!(body["stickers"].as_array().unwrap().len(), 2);
    assert_eq!(body["collections"].as_array().unwrap().len(), 1);
    assert_eq!(body["crates"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_fails_whole_when_one_collection_is_broken() {
    let app = spawn_app();

    // de/stickers.json is malformed; the other three documents are fine.
    let res = get(&app, "/api/de/search?q=ak").await;
    let body: Value = read_json(expect_status(res, StatusCode::INTERNAL_SERVER_ERROR).await).await;
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn repeated_q_gets_a_fixed_error_body() {
    let app = spawn_app();

    let res = get(&app, "/api/en/search?q=ak&q=awp").await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body, json!({ "error": "Invalid query parameters" }));
}
