use axum::http::StatusCode;

use crate::common::{create_test_operator, get, test_app};

#[tokio::test]
async fn officer_lookup_returns_profile_for_police() {
    let (app, _pool, _guard) = test_app().await;
    let user_id = create_test_operator(&app, "patrol_officer", "police").await;

    let (status, resp) = get(&app, &format!("/officers/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["user_id"].as_i64(), Some(user_id));
    assert_eq!(resp["rank_title"], "Constable");
    assert_eq!(resp["station"], "Central");
}

#[tokio::test]
async fn officer_lookup_404_for_admin_and_court() {
    let (app, _pool, _guard) = test_app().await;
    let admin_id = create_test_operator(&app, "admin_acct", "admin").await;
    let court_id = create_test_operator(&app, "court_acct", "court").await;

    let (status, resp) = get(&app, &format!("/officers/{admin_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");

    let (status, _) = get(&app, &format!("/officers/{court_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn officer_lookup_404_for_unknown_user() {
    let (app, _pool, _guard) = test_app().await;

    let (status, _) = get(&app, "/officers/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
