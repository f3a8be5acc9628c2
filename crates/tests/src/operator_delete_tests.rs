use axum::http::StatusCode;

use crate::common::{create_test_case, create_test_criminal, create_test_operator, delete, get, test_app};

#[tokio::test]
async fn delete_operator_success() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "short_lived", "court").await;

    let (status, _) = delete(&app, &format!("/users/{user_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/users/{user_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_operator_404() {
    let (app, _pool, _guard) = test_app().await;

    let (status, _) = delete(&app, "/users/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_police_operator_unassigns_their_cases() {
    let (app, pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "leaving_officer", "police").await;

    let (_, officer) = get(&app, &format!("/officers/{user_id}")).await;
    let officer_id = officer["officer_id"].as_i64().unwrap();

    let criminal_id = create_test_criminal(&app, "Assigned Subject").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    // Assign the case to the officer directly
    sqlx::query("UPDATE fir SET officer_id = $1 WHERE fir_id = $2")
        .bind(officer_id)
        .bind(fir_id)
        .execute(&pool)
        .await
        .unwrap();

    let (status, _) = delete(&app, &format!("/users/{user_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The case survives, now unassigned
    let (status, case) = get(&app, &format!("/cases/{fir_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(case["officer_id"].is_null());
    assert!(case["officer_name"].is_null());
}
