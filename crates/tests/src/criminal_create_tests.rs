use axum::http::StatusCode;

use crate::common::{get, post_json, test_app};

#[tokio::test]
async fn create_criminal_success() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "name": "R. Malhotra",
        "age": 29,
        "gender": "Male",
        "address": "4 Canal Street",
    });

    let (status, resp) = post_json(&app, "/criminals", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["name"], "R. Malhotra");
    assert_eq!(resp["age"], 29);
    assert_eq!(resp["gender"], "Male");
    assert_eq!(resp["address"], "4 Canal Street");
    assert!(resp["criminal_id"].as_i64().is_some());
}

#[tokio::test]
async fn create_criminal_defaults_to_under_trial() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "name": "Default Status" });
    let (status, resp) = post_json(&app, "/criminals", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["status"], "Under Trial");
}

#[tokio::test]
async fn create_criminal_minimal_fields_null() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "name": "Name Only" });
    let (status, resp) = post_json(&app, "/criminals", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(resp["age"].is_null());
    assert!(resp["gender"].is_null());
    assert!(resp["address"].is_null());
}

#[tokio::test]
async fn create_criminal_empty_name_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "name": "" });
    let (status, resp) = post_json(&app, "/criminals", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp["field_errors"]["name"], "Name is required");
}

#[tokio::test]
async fn create_criminal_invalid_gender_rejected() {
    let (app, _pool, _guard) = test_app().await;

    // Gender is a closed enum on the wire
    let body = serde_json::json!({ "name": "Bad Gender", "gender": "unknown" });
    let (status, _) = post_json(&app, "/criminals", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_criminal_by_id() {
    let (app, _pool, _guard) = test_app().await;
    let id = crate::common::create_test_criminal(&app, "Lookup Target").await;

    let (status, resp) = get(&app, &format!("/criminals/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["criminal_id"].as_i64(), Some(id));
    assert_eq!(resp["name"], "Lookup Target");
}

#[tokio::test]
async fn get_nonexistent_criminal_404() {
    let (app, _pool, _guard) = test_app().await;

    let (status, resp) = get(&app, "/criminals/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}

#[tokio::test]
async fn list_criminals_newest_first() {
    let (app, _pool, _guard) = test_app().await;

    let first = crate::common::create_test_criminal(&app, "Older Record").await;
    let second = crate::common::create_test_criminal(&app, "Newer Record").await;

    let (status, resp) = get(&app, "/criminals").await;
    assert_eq!(status, StatusCode::OK);
    let list = resp.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["criminal_id"].as_i64(), Some(second));
    assert_eq!(list[1]["criminal_id"].as_i64(), Some(first));
}
