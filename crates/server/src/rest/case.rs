use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, CaseResponse, CreateCaseRequest, UpdateCaseRequest};

use crate::error_convert::ValidateRequest;
use crate::repo;

/// POST /cases
///
/// Registers a FIR. At least one linked criminal is required; links are
/// created only for ids that exist.
#[utoipa::path(
    post,
    path = "/cases",
    request_body = CreateCaseRequest,
    responses(
        (status = 201, description = "Case registered", body = CaseResponse),
        (status = 400, description = "No valid criminals to link", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "cases"
)]
pub async fn create_case(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<CaseResponse>), AppError> {
    body.validate_request()?;
    let case = repo::case::create(&pool, &body).await?;
    Ok((StatusCode::CREATED, Json(case)))
}

/// GET /cases
#[utoipa::path(
    get,
    path = "/cases",
    responses(
        (status = 200, description = "All cases with linked criminals", body = Vec<CaseResponse>)
    ),
    tag = "cases"
)]
pub async fn list_cases(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<CaseResponse>>, AppError> {
    Ok(Json(repo::case::list(&pool).await?))
}

/// GET /cases/{id}
#[utoipa::path(
    get,
    path = "/cases/{id}",
    params(("id" = i64, Path, description = "Case (FIR) ID")),
    responses(
        (status = 200, description = "Case found", body = CaseResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn get_case(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<Json<CaseResponse>, AppError> {
    let case = repo::case::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {id} not found")))?;
    Ok(Json(case))
}

/// PUT /cases/{id}
///
/// Partial update. When `criminal_ids` is present the association set is
/// replaced wholesale; when absent the existing links are kept.
#[utoipa::path(
    put,
    path = "/cases/{id}",
    request_body = UpdateCaseRequest,
    params(("id" = i64, Path, description = "Case (FIR) ID")),
    responses(
        (status = 200, description = "Case updated", body = CaseResponse),
        (status = 404, description = "Not found", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "cases"
)]
pub async fn update_case(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateCaseRequest>,
) -> Result<Json<CaseResponse>, AppError> {
    body.validate_request()?;
    let case = repo::case::update(&pool, id, &body)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {id} not found")))?;
    Ok(Json(case))
}

/// DELETE /cases/{id}
#[utoipa::path(
    delete,
    path = "/cases/{id}",
    params(("id" = i64, Path, description = "Case (FIR) ID")),
    responses(
        (status = 204, description = "Case deleted"),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn delete_case(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::case::delete(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Case {id} not found")))
    }
}
