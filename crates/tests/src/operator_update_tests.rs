use axum::http::StatusCode;

use crate::common::{create_test_operator, get, post_json, put_json, test_app};

#[tokio::test]
async fn update_operator_renames_account() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "rename_me", "court").await;

    let body = serde_json::json!({ "name": "Renamed Clerk" });
    let (status, resp) = put_json(&app, &format!("/users/{user_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["name"], "Renamed Clerk");
    // Untouched fields survive the partial update
    assert_eq!(resp["username"], "rename_me");
    assert_eq!(resp["role"], "court");
}

#[tokio::test]
async fn update_without_password_keeps_credential() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "stable_pw", "court").await;

    let body = serde_json::json!({ "name": "Still Works" });
    let (status, _) = put_json(&app, &format!("/users/{user_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    // The password seeded by create_test_operator still authenticates
    let login = serde_json::json!({ "username": "stable_pw", "password": "test-pass" });
    let (status, resp) = post_json(&app, "/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::OK, "login after update failed: {resp}");
}

#[tokio::test]
async fn update_with_password_rotates_credential() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "rotate_pw", "court").await;

    let body = serde_json::json!({ "password": "brand-new" });
    let (status, _) = put_json(&app, &format!("/users/{user_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let old = serde_json::json!({ "username": "rotate_pw", "password": "test-pass" });
    let (status, _) = post_json(&app, "/login", &old.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let new = serde_json::json!({ "username": "rotate_pw", "password": "brand-new" });
    let (status, _) = post_json(&app, "/login", &new.to_string()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_blank_password_422() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "blank_pw", "court").await;

    // A blank password is a client bug — the UI omits the field instead
    let body = serde_json::json!({ "password": "" });
    let (status, resp) = put_json(&app, &format!("/users/{user_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp["field_errors"]["password"], "Password must not be blank");
}

#[tokio::test]
async fn promote_to_police_creates_officer_profile() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "promoted", "court").await;

    let (status, _) = get(&app, &format!("/officers/{user_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body = serde_json::json!({ "role": "police", "rank_title": "Inspector", "station": "East" });
    let (status, _) = put_json(&app, &format!("/users/{user_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, officer) = get(&app, &format!("/officers/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(officer["rank_title"], "Inspector");
    assert_eq!(officer["station"], "East");
}

#[tokio::test]
async fn demote_from_police_drops_officer_profile() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "demoted", "police").await;

    let (status, _) = get(&app, &format!("/officers/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let body = serde_json::json!({ "role": "court" });
    let (status, _) = put_json(&app, &format!("/users/{user_id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/officers/{user_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_nonexistent_operator_404() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "name": "Ghost" });
    let (status, resp) = put_json(&app, "/users/999999", &body.to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}
