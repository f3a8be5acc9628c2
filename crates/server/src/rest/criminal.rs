use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, CreateCriminalRequest, CriminalResponse, UpdateCriminalRequest};

use crate::error_convert::ValidateRequest;
use crate::repo;

/// POST /criminals
#[utoipa::path(
    post,
    path = "/criminals",
    request_body = CreateCriminalRequest,
    responses(
        (status = 201, description = "Criminal record created", body = CriminalResponse),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "criminals"
)]
pub async fn create_criminal(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateCriminalRequest>,
) -> Result<(StatusCode, Json<CriminalResponse>), AppError> {
    body.validate_request()?;
    let criminal = repo::criminal::create(&pool, &body).await?;
    Ok((StatusCode::CREATED, Json(criminal)))
}

/// GET /criminals
#[utoipa::path(
    get,
    path = "/criminals",
    responses(
        (status = 200, description = "All criminal records", body = Vec<CriminalResponse>)
    ),
    tag = "criminals"
)]
pub async fn list_criminals(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<CriminalResponse>>, AppError> {
    Ok(Json(repo::criminal::list(&pool).await?))
}

/// GET /criminals/{id}
#[utoipa::path(
    get,
    path = "/criminals/{id}",
    params(("id" = i64, Path, description = "Criminal ID")),
    responses(
        (status = 200, description = "Criminal record found", body = CriminalResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "criminals"
)]
pub async fn get_criminal(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<Json<CriminalResponse>, AppError> {
    let criminal = repo::criminal::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Criminal {id} not found")))?;
    Ok(Json(criminal))
}

/// PUT /criminals/{id}
#[utoipa::path(
    put,
    path = "/criminals/{id}",
    request_body = UpdateCriminalRequest,
    params(("id" = i64, Path, description = "Criminal ID")),
    responses(
        (status = 200, description = "Criminal record updated", body = CriminalResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "criminals"
)]
pub async fn update_criminal(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateCriminalRequest>,
) -> Result<Json<CriminalResponse>, AppError> {
    body.validate_request()?;
    let criminal = repo::criminal::update(&pool, id, &body)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Criminal {id} not found")))?;
    Ok(Json(criminal))
}

/// DELETE /criminals/{id}
///
/// Refused with 409 while any case still references the record.
#[utoipa::path(
    delete,
    path = "/criminals/{id}",
    params(("id" = i64, Path, description = "Criminal ID")),
    responses(
        (status = 204, description = "Criminal record deleted"),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Still referenced by a case", body = AppError)
    ),
    tag = "criminals"
)]
pub async fn delete_criminal(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::criminal::delete(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Criminal {id} not found")))
    }
}
