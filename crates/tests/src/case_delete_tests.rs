use axum::http::StatusCode;

use crate::common::{create_test_case, create_test_criminal, delete, get, test_app};

#[tokio::test]
async fn delete_case_success() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Short Case Accused").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    let (status, _) = delete(&app, &format!("/cases/{fir_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/cases/{fir_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_case_404() {
    let (app, _pool, _guard) = test_app().await;

    let (status, resp) = delete(&app, "/cases/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}

#[tokio::test]
async fn delete_case_keeps_criminal_records() {
    let (app, pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Surviving Record").await;
    let fir_id = create_test_case(&app, &[criminal_id]).await;

    let (status, _) = delete(&app, &format!("/cases/{fir_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The criminal record is untouched
    let (status, resp) = get(&app, &format!("/criminals/{criminal_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["name"], "Surviving Record");

    // The join rows cascaded away with the case
    let orphans: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM fir_criminal WHERE fir_id = $1")
            .bind(fir_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn delete_one_case_keeps_links_of_others() {
    let (app, _pool, _guard) = test_app().await;
    let criminal_id = create_test_criminal(&app, "Multi Case Accused").await;
    let kept = create_test_case(&app, &[criminal_id]).await;
    let removed = create_test_case(&app, &[criminal_id]).await;

    let (status, _) = delete(&app, &format!("/cases/{removed}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, resp) = get(&app, &format!("/cases/{kept}")).await;
    assert_eq!(status, StatusCode::OK);
    let linked = resp["criminals"].as_array().unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0]["criminal_id"].as_i64(), Some(criminal_id));
}
