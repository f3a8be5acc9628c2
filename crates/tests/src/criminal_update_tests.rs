use axum::http::StatusCode;

use crate::common::{create_test_criminal, get, put_json, test_app};

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let (app, _pool, _guard) = test_app().await;
    let id = create_test_criminal(&app, "Partial Subject").await;

    let body = serde_json::json!({ "address": "17 Harbour Road" });
    let (status, resp) = put_json(&app, &format!("/criminals/{id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["address"], "17 Harbour Road");
    assert_eq!(resp["name"], "Partial Subject");
    assert_eq!(resp["gender"], "Male");
    assert_eq!(resp["status"], "Under Trial");
}

#[tokio::test]
async fn update_status_to_convicted() {
    let (app, _pool, _guard) = test_app().await;
    let id = create_test_criminal(&app, "Sentenced Subject").await;

    let body = serde_json::json!({ "status": "Convicted" });
    let (status, resp) = put_json(&app, &format!("/criminals/{id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "Convicted");

    let (_, fetched) = get(&app, &format!("/criminals/{id}")).await;
    assert_eq!(fetched["status"], "Convicted");
}

#[tokio::test]
async fn update_status_to_released() {
    let (app, _pool, _guard) = test_app().await;
    let id = create_test_criminal(&app, "Released Subject").await;

    let body = serde_json::json!({ "status": "Released" });
    let (status, resp) = put_json(&app, &format!("/criminals/{id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "Released");
}

#[tokio::test]
async fn update_rename_keeps_status() {
    let (app, _pool, _guard) = test_app().await;
    let id = create_test_criminal(&app, "Old Name").await;

    let body = serde_json::json!({ "status": "Released" });
    let (status, _) = put_json(&app, &format!("/criminals/{id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let body = serde_json::json!({ "name": "New Name" });
    let (status, resp) = put_json(&app, &format!("/criminals/{id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["name"], "New Name");
    assert_eq!(resp["status"], "Released");
}

#[tokio::test]
async fn update_empty_name_422() {
    let (app, _pool, _guard) = test_app().await;
    let id = create_test_criminal(&app, "Keeps Name").await;

    let body = serde_json::json!({ "name": "" });
    let (status, resp) = put_json(&app, &format!("/criminals/{id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp["field_errors"]["name"], "Name is required");

    let (_, fetched) = get(&app, &format!("/criminals/{id}")).await;
    assert_eq!(fetched["name"], "Keeps Name");
}

#[tokio::test]
async fn update_nonexistent_criminal_404() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "name": "Ghost" });
    let (status, resp) = put_json(&app, "/criminals/999999", &body.to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}
