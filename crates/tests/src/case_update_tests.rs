use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{
    create_test_case, create_test_criminal, create_test_operator, get, put_json, test_app,
};

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Stable Accused").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    let body = serde_json::json!({ "crime_description": "Stolen bicycle recovered" });
    let (status, resp) = put_json(&app, &format!("/cases/{fir_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["crime_description"], "Stolen bicycle recovered");
    // Seeded fields survive
    assert_eq!(resp["fir_date"], "2026-05-01");
    assert_eq!(resp["crime_type"], "Theft");
    assert_eq!(resp["criminals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_replaces_criminal_links() {
    let (app, _pool, _guard) = test_app().await;
    let original = create_test_criminal(&app, "Original Accused").await;
    let replacement = create_test_criminal(&app, "Replacement Accused").await;
    let fir_id = create_test_case(&app, &[original]).await;

    let body = serde_json::json!({ "criminal_ids": [replacement] });
    let (status, resp) = put_json(&app, &format!("/cases/{fir_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let linked = resp["criminals"].as_array().unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0]["criminal_id"].as_i64(), Some(replacement));
}

#[tokio::test]
async fn update_without_criminal_ids_keeps_links() {
    let (app, _pool, _guard) = test_app().await;
    let first = create_test_criminal(&app, "Kept Accused A").await;
    let second = create_test_criminal(&app, "Kept Accused B").await;
    let fir_id = create_test_case(&app, &[first, second]).await;

    let body = serde_json::json!({ "case_status": "In Court" });
    let (status, resp) = put_json(&app, &format!("/cases/{fir_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["case_status"], "In Court");
    assert_eq!(resp["criminals"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_with_empty_criminal_ids_422() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Unremovable Accused").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    let body = serde_json::json!({ "criminal_ids": [] });
    let (status, resp) = put_json(&app, &format!("/cases/{fir_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp["field_errors"]["criminal_ids"],
        "Select at least one criminal"
    );

    // Links are untouched
    let (_, fetched) = get(&app, &format!("/cases/{fir_id}")).await;
    assert_eq!(fetched["criminals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_with_unknown_criminal_ids_400() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Safe Accused").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    let body = serde_json::json!({ "criminal_ids": [876543] });
    let (status, resp) = put_json(&app, &format!("/cases/{fir_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["message"], "None of the given criminal ids exist");
}

#[tokio::test]
async fn close_case_with_verdict_and_punishment() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Sentenced Accused").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    let body = serde_json::json!({
        "case_status": "Closed",
        "verdict": "Guilty",
        "punishment_type": "Imprisonment",
        "punishment_duration_years": 3,
        "punishment_start_date": "2026-08-01",
    });
    let (status, resp) = put_json(&app, &format!("/cases/{fir_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["case_status"], "Closed");
    assert_eq!(resp["verdict"], "Guilty");
    assert_eq!(resp["punishment_type"], "Imprisonment");
    assert_eq!(resp["punishment_duration_years"], 3);
    assert_eq!(resp["punishment_start_date"], "2026-08-01");
}

#[tokio::test]
async fn assign_officer_on_update() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "late_assignee", "police").await;
    let (_, officer) = get(&app, &format!("/officers/{user_id}")).await;
    let officer_id = officer["officer_id"].as_i64().unwrap();

    let criminal_id = create_test_criminal(&app, "Reassigned Accused").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    let body = serde_json::json!({ "officer_id": officer_id });
    let (status, resp) = put_json(&app, &format!("/cases/{fir_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["officer_id"].as_i64(), Some(officer_id));
    assert_eq!(resp["officer_name"], "Test late_assignee");
}

#[tokio::test]
async fn update_nonexistent_case_404() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "crime_type": "Arson" });
    let (status, resp) = put_json(&app, "/cases/999999", &body.to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}
