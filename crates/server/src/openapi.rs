use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthUser, CaseResponse, CaseStatus, CreateCaseRequest,
    CreateCriminalRequest, CreateOperatorRequest, CriminalResponse, CriminalStatus, Gender,
    LoginRequest, MessageResponse, OfficerResponse, Role, UpdateCaseRequest,
    UpdateCriminalRequest, UpdateOperatorRequest, UserResponse, Verdict,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::auth::login,
        rest::auth::logout,
        rest::operator::list_users,
        rest::operator::get_user,
        rest::operator::create_user,
        rest::operator::update_user,
        rest::operator::delete_user,
        rest::criminal::list_criminals,
        rest::criminal::get_criminal,
        rest::criminal::create_criminal,
        rest::criminal::update_criminal,
        rest::criminal::delete_criminal,
        rest::case::list_cases,
        rest::case::get_case,
        rest::case::create_case,
        rest::case::update_case,
        rest::case::delete_case,
        rest::officer::get_officer,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AuthUser,
        Role,
        Gender,
        CriminalStatus,
        CaseStatus,
        Verdict,
        LoginRequest,
        MessageResponse,
        UserResponse,
        OfficerResponse,
        CriminalResponse,
        CaseResponse,
        CreateOperatorRequest,
        UpdateOperatorRequest,
        CreateCriminalRequest,
        UpdateCriminalRequest,
        CreateCaseRequest,
        UpdateCaseRequest,
        health::HealthResponse,
    )),
    tags(
        (name = "auth", description = "Session endpoints"),
        (name = "operators", description = "Operator account management"),
        (name = "criminals", description = "Criminal record management"),
        (name = "cases", description = "FIR case management"),
        (name = "officers", description = "Officer profile lookup"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "FIR Registry API",
        description = "Law enforcement record keeping: operators, criminals, and FIR cases",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at the root.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
