pub mod auth;
pub mod case;
pub mod criminal;
pub mod officer;
pub mod operator;

use axum::{
    routing::{get, post},
    Router,
};

use crate::db::AppState;

/// Build the REST API router. Paths mirror the resource model one-to-one:
/// operators under /users, criminal records under /criminals, FIR cases
/// under /cases, plus the officer profile lookup.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/users", get(operator::list_users).post(operator::create_user))
        .route(
            "/users/{id}",
            get(operator::get_user)
                .put(operator::update_user)
                .delete(operator::delete_user),
        )
        .route(
            "/criminals",
            get(criminal::list_criminals).post(criminal::create_criminal),
        )
        .route(
            "/criminals/{id}",
            get(criminal::get_criminal)
                .put(criminal::update_criminal)
                .delete(criminal::delete_criminal),
        )
        .route("/cases", get(case::list_cases).post(case::create_case))
        .route(
            "/cases/{id}",
            get(case::get_case)
                .put(case::update_case)
                .delete(case::delete_case),
        )
        .route("/officers/{user_id}", get(officer::get_officer))
}
