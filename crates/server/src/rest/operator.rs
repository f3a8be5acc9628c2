use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::{Pool, Postgres};

use shared_types::{
    AppError, CreateOperatorRequest, Role, UpdateOperatorRequest, UserResponse,
};

use crate::auth::password;
use crate::error_convert::ValidateRequest;
use crate::repo;

/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateOperatorRequest,
    responses(
        (status = 201, description = "Operator created", body = UserResponse),
        (status = 409, description = "Username taken", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "operators"
)]
pub async fn create_user(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateOperatorRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    body.validate_request()?;

    let password_hash =
        password::hash_password(&body.password).map_err(|e| AppError::internal(e.to_string()))?;

    let user = repo::user::create(&pool, &body, &password_hash).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    role: Option<Role>,
}

/// GET /users?role=
#[utoipa::path(
    get,
    path = "/users",
    params(("role" = Option<Role>, Query, description = "Restrict to one role")),
    responses(
        (status = 200, description = "Matching operator accounts", body = Vec<UserResponse>)
    ),
    tag = "operators"
)]
pub async fn list_users(
    State(pool): State<Pool<Postgres>>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    Ok(Json(repo::user::list(&pool, query.role).await?))
}

/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Operator found", body = UserResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "operators"
)]
pub async fn get_user(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = repo::user::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    Ok(Json(user))
}

/// PUT /users/{id}
///
/// Partial update. An absent `password` field leaves the stored credential
/// unchanged.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UpdateOperatorRequest,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Operator updated", body = UserResponse),
        (status = 404, description = "Not found", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "operators"
)]
pub async fn update_user(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateOperatorRequest>,
) -> Result<Json<UserResponse>, AppError> {
    body.validate_request()?;

    let password_hash = match &body.password {
        Some(password) => Some(
            password::hash_password(password).map_err(|e| AppError::internal(e.to_string()))?,
        ),
        None => None,
    };

    let user = repo::user::update(&pool, id, &body, password_hash.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    Ok(Json(user))
}

/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "Operator deleted"),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "operators"
)]
pub async fn delete_user(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::user::delete(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("User {id} not found")))
    }
}
