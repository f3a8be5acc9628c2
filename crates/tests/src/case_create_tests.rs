use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{create_test_criminal, create_test_operator, get, post_json, test_app};

#[tokio::test]
async fn create_case_with_linked_criminals() {
    let (app, _pool, _guard) = test_app().await;
    let first = create_test_criminal(&app, "First Accused").await;
    let second = create_test_criminal(&app, "Second Accused").await;

    let body = serde_json::json!({
        "fir_date": "2026-06-12",
        "crime_type": "Burglary",
        "crime_date": "2026-06-10",
        "crime_description": "Forced entry at a warehouse",
        "criminal_ids": [first, second],
    });

    let (status, resp) = post_json(&app, "/cases", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["fir_date"], "2026-06-12");
    assert_eq!(resp["crime_type"], "Burglary");
    assert_eq!(resp["case_status"], "Open");
    assert_eq!(resp["verdict"], "Pending");
    assert!(resp["officer_id"].is_null());

    let linked = resp["criminals"].as_array().unwrap();
    assert_eq!(linked.len(), 2);
    assert_eq!(linked[0]["criminal_id"].as_i64(), Some(first));
    assert_eq!(linked[1]["criminal_id"].as_i64(), Some(second));
}

#[tokio::test]
async fn create_case_with_assigned_officer() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "case_officer", "police").await;
    let (_, officer) = get(&app, &format!("/officers/{user_id}")).await;
    let officer_id = officer["officer_id"].as_i64().unwrap();
    let criminal_id = create_test_criminal(&app, "Assigned Accused").await;

    let body = serde_json::json!({
        "officer_id": officer_id,
        "fir_date": "2026-07-01",
        "crime_type": "Fraud",
        "criminal_ids": [criminal_id],
    });

    let (status, resp) = post_json(&app, "/cases", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["officer_id"].as_i64(), Some(officer_id));
    assert_eq!(resp["officer_name"], "Test case_officer");
}

#[tokio::test]
async fn create_case_with_empty_criminal_ids_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "fir_date": "2026-07-01",
        "crime_type": "Theft",
        "criminal_ids": [],
    });

    let (status, resp) = post_json(&app, "/cases", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp["field_errors"]["criminal_ids"],
        "Select at least one criminal"
    );
}

#[tokio::test]
async fn create_case_with_unknown_criminal_ids_400() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "fir_date": "2026-07-01",
        "crime_type": "Theft",
        "criminal_ids": [987654, 987655],
    });

    let (status, resp) = post_json(&app, "/cases", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["message"], "None of the given criminal ids exist");
}

#[tokio::test]
async fn create_case_with_unknown_officer_400() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Orphan Case Accused").await;

    let body = serde_json::json!({
        "officer_id": 424242,
        "fir_date": "2026-07-01",
        "criminal_ids": [criminal_id],
    });

    let (status, resp) = post_json(&app, "/cases", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["message"], "Officer 424242 not found");
}

#[tokio::test]
async fn create_case_without_fir_date_rejected() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Dateless Accused").await;

    let body = serde_json::json!({
        "crime_type": "Theft",
        "criminal_ids": [criminal_id],
    });

    let (status, _) = post_json(&app, "/cases", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_cases_newest_first_with_links() {
    let (app, _pool, _guard) = test_app().await;
    let a = create_test_criminal(&app, "List Accused A").await;
    let b = create_test_criminal(&app, "List Accused B").await;

    let older = crate::common::create_test_case(&app, &[a]).await;
    let newer = crate::common::create_test_case(&app, &[a, b]).await;

    let (status, resp) = get(&app, "/cases").await;
    assert_eq!(status, StatusCode::OK);
    let list = resp.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["fir_id"].as_i64(), Some(newer));
    assert_eq!(list[0]["criminals"].as_array().unwrap().len(), 2);
    assert_eq!(list[1]["fir_id"].as_i64(), Some(older));
    assert_eq!(list[1]["criminals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_nonexistent_case_404() {
    let (app, _pool, _guard) = test_app().await;

    let (status, resp) = get(&app, "/cases/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}
