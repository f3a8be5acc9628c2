use axum::http::StatusCode;

use crate::common::{create_test_operator, post_json, test_app};

#[tokio::test]
async fn login_success_returns_identity() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "duty_officer", "police").await;

    let body = serde_json::json!({ "username": "duty_officer", "password": "test-pass" });
    let (status, resp) = post_json(&app, "/login", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["user_id"].as_i64(), Some(user_id));
    assert_eq!(resp["username"], "duty_officer");
    assert_eq!(resp["role"], "police");
}

#[tokio::test]
async fn login_response_carries_stored_role_not_requested_role() {
    let (app, _pool, _guard) = test_app().await;
    create_test_operator(&app, "beat_cop", "police").await;

    // The role field on the login form is advisory; the stored role wins
    let body = serde_json::json!({
        "username": "beat_cop",
        "password": "test-pass",
        "role": "admin",
    });
    let (status, resp) = post_json(&app, "/login", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["role"], "police");
}

#[tokio::test]
async fn login_wrong_password_401() {
    let (app, _pool, _guard) = test_app().await;
    create_test_operator(&app, "careful_user", "court").await;

    let body = serde_json::json!({ "username": "careful_user", "password": "nope" });
    let (status, resp) = post_json(&app, "/login", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["message"], "Invalid username or password");
}

#[tokio::test]
async fn login_unknown_username_401_with_same_message() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "username": "nobody_here", "password": "whatever" });
    let (status, resp) = post_json(&app, "/login", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Identical message for unknown user and bad password
    assert_eq!(resp["message"], "Invalid username or password");
}

#[tokio::test]
async fn login_stores_hashed_refresh_token() {
    let (app, pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "token_holder", "admin").await;

    let body = serde_json::json!({ "username": "token_holder", "password": "test-pass" });
    let (status, _) = post_json(&app, "/login", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let hashes: Vec<String> =
        sqlx::query_scalar("SELECT token_hash FROM refresh_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(hashes.len(), 1);
    // SHA-256 hex digest, never a raw JWT
    assert_eq!(hashes[0].len(), 64);
    assert!(!hashes[0].contains('.'));
}

#[tokio::test]
async fn logout_revokes_refresh_tokens() {
    let (app, pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "leaver", "admin").await;

    let body = serde_json::json!({ "username": "leaver", "password": "test-pass" });
    let (status, _) = post_json(&app, "/login", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    // Logout with a Bearer access token (the REST path for API clients)
    let token = server::auth::jwt::create_access_token(user_id, "leaver", "admin").unwrap();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/logout")
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let live: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM refresh_tokens WHERE user_id = $1 AND NOT revoked",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(live, 0);
}
