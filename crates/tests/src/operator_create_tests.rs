use axum::http::StatusCode;

use crate::common::{get, post_json, test_app};

#[tokio::test]
async fn create_operator_success() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "username": "desk_clerk",
        "password": "secret123",
        "name": "Desk Clerk",
        "role": "court",
    });

    let (status, resp) = post_json(&app, "/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["username"], "desk_clerk");
    assert_eq!(resp["name"], "Desk Clerk");
    assert_eq!(resp["role"], "court");
    assert!(resp["user_id"].as_i64().is_some());
    // The stored credential never appears in a response
    assert!(resp.get("password").is_none());
    assert!(resp.get("password_hash").is_none());
}

#[tokio::test]
async fn create_police_operator_seeds_officer_profile() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "username": "hc_sharma",
        "password": "secret123",
        "name": "H.C. Sharma",
        "role": "police",
        "rank_title": "Head Constable",
        "station": "Kotwali",
    });

    let (status, resp) = post_json(&app, "/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = resp["user_id"].as_i64().unwrap();

    let (status, officer) = get(&app, &format!("/officers/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(officer["rank_title"], "Head Constable");
    assert_eq!(officer["station"], "Kotwali");
    assert_eq!(officer["name"], "H.C. Sharma");
}

#[tokio::test]
async fn create_operator_short_username_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "username": "ab",
        "password": "secret123",
        "name": "Too Short",
        "role": "admin",
    });

    let (status, resp) = post_json(&app, "/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp["field_errors"]["username"],
        "Username must be at least 3 characters"
    );
}

#[tokio::test]
async fn create_operator_duplicate_username_409() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "username": "unique_one",
        "password": "secret123",
        "name": "First",
        "role": "admin",
    });
    let (status, _) = post_json(&app, "/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let again = serde_json::json!({
        "username": "unique_one",
        "password": "other",
        "name": "Second",
        "role": "court",
    });
    let (status, resp) = post_json(&app, "/users", &again.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(resp["kind"], "Conflict");
    assert_eq!(resp["message"], "This username is already taken");
}

#[tokio::test]
async fn create_operator_unknown_field_rejected() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "username": "strict_check",
        "password": "secret123",
        "name": "Strict",
        "role": "admin",
        "is_superuser": true,
    });

    let (status, _) = post_json(&app, "/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_operators_newest_first() {
    let (app, _pool, _guard) = test_app().await;

    let first = crate::common::create_test_operator(&app, "older", "court").await;
    let second = crate::common::create_test_operator(&app, "newer", "police").await;

    let (status, resp) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let list = resp.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["user_id"].as_i64(), Some(second));
    assert_eq!(list[1]["user_id"].as_i64(), Some(first));
}

#[tokio::test]
async fn list_operators_filters_by_role() {
    let (app, _pool, _guard) = test_app().await;

    crate::common::create_test_operator(&app, "chief", "admin").await;
    let constable = crate::common::create_test_operator(&app, "constable", "police").await;
    crate::common::create_test_operator(&app, "registrar", "court").await;

    let (status, resp) = get(&app, "/users?role=police").await;
    assert_eq!(status, StatusCode::OK);
    let list = resp.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["user_id"].as_i64(), Some(constable));
    assert_eq!(list[0]["role"], "police");

    // No filter still returns everyone
    let (status, resp) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.as_array().unwrap().len(), 3);
}
