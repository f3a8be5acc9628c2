use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, OfficerResponse};

use crate::repo;

/// GET /officers/{user_id}
///
/// Resolves the officer profile for a user account — the police dashboard
/// shows rank and station from here.
#[utoipa::path(
    get,
    path = "/officers/{user_id}",
    params(("user_id" = i64, Path, description = "Owning user ID")),
    responses(
        (status = 200, description = "Officer profile", body = OfficerResponse),
        (status = 404, description = "No officer profile for this user", body = AppError)
    ),
    tag = "officers"
)]
pub async fn get_officer(
    State(pool): State<Pool<Postgres>>,
    Path(user_id): Path<i64>,
) -> Result<Json<OfficerResponse>, AppError> {
    let officer = repo::officer::find_by_user_id(&pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No officer profile for user {user_id}")))?;
    Ok(Json(officer))
}
