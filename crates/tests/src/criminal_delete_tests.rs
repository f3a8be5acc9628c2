use axum::http::StatusCode;

use crate::common::{create_test_case, create_test_criminal, delete, get, test_app};

#[tokio::test]
async fn delete_unlinked_criminal_success() {
    let (app, _pool, _guard) = test_app().await;
    let id = create_test_criminal(&app, "Free To Remove").await;

    let (status, _) = delete(&app, &format!("/criminals/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/criminals/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_criminal_404() {
    let (app, _pool, _guard) = test_app().await;

    let (status, resp) = delete(&app, "/criminals/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}

#[tokio::test]
async fn delete_case_linked_criminal_409() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Linked Subject").await;
    create_test_case(&app, &[criminal_id]).await;

    let (status, resp) = delete(&app, &format!("/criminals/{criminal_id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(resp["kind"], "Conflict");
    assert_eq!(
        resp["message"],
        "This criminal is linked to one or more cases and cannot be deleted"
    );

    // The record is still there
    let (status, _) = get(&app, &format!("/criminals/{criminal_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

// The application-layer check is not transactional, so the schema itself
// must refuse to drop a still-linked record. A raw DELETE bypassing the
// handler has to hit the RESTRICT constraint instead of cascading the links.
#[tokio::test]
async fn raw_delete_of_linked_criminal_blocked_by_schema() {
    let (app, pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Schema Guarded").await;
    let case_id = create_test_case(&app, &[criminal_id]).await;

    let result = sqlx::query("DELETE FROM criminal WHERE criminal_id = $1")
        .bind(criminal_id)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "DELETE should violate the link constraint");

    let links: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM fir_criminal WHERE fir_id = $1")
            .bind(case_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(links, 1);
}

#[tokio::test]
async fn delete_allowed_after_last_linked_case_removed() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Eventually Free").await;
    let first_case = create_test_case(&app, &[criminal_id]).await;
    let second_case = create_test_case(&app, &[criminal_id]).await;

    let (status, _) = delete(&app, &format!("/cases/{first_case}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // One case still references the record
    let (status, _) = delete(&app, &format!("/criminals/{criminal_id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = delete(&app, &format!("/cases/{second_case}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = delete(&app, &format!("/criminals/{criminal_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
