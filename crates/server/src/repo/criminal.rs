use shared_types::{
    AppError, CreateCriminalRequest, CriminalResponse, CriminalStatus, Gender,
    UpdateCriminalRequest,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CriminalRow {
    criminal_id: i64,
    name: String,
    age: Option<i32>,
    gender: Option<String>,
    address: Option<String>,
    status: String,
}

impl From<CriminalRow> for CriminalResponse {
    fn from(row: CriminalRow) -> Self {
        CriminalResponse {
            criminal_id: row.criminal_id,
            name: row.name,
            age: row.age,
            gender: row.gender.as_deref().and_then(Gender::parse),
            address: row.address,
            status: CriminalStatus::from_str_or_default(&row.status),
        }
    }
}

const COLUMNS: &str = "criminal_id, name, age, gender, address, status";

pub async fn create(
    pool: &Pool<Postgres>,
    req: &CreateCriminalRequest,
) -> Result<CriminalResponse, AppError> {
    let status = req.status.unwrap_or_default();

    let row = sqlx::query_as::<_, CriminalRow>(&format!(
        r#"INSERT INTO criminal (name, age, gender, address, status)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING {COLUMNS}"#
    ))
    .bind(&req.name)
    .bind(req.age)
    .bind(req.gender.map(|g| g.as_str()))
    .bind(req.address.as_deref())
    .bind(status.as_str())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.into())
}

pub async fn find_by_id(
    pool: &Pool<Postgres>,
    criminal_id: i64,
) -> Result<Option<CriminalResponse>, AppError> {
    let row = sqlx::query_as::<_, CriminalRow>(&format!(
        "SELECT {COLUMNS} FROM criminal WHERE criminal_id = $1"
    ))
    .bind(criminal_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.map(CriminalResponse::from))
}

pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<CriminalResponse>, AppError> {
    let rows = sqlx::query_as::<_, CriminalRow>(&format!(
        "SELECT {COLUMNS} FROM criminal ORDER BY criminal_id DESC"
    ))
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows.into_iter().map(CriminalResponse::from).collect())
}

pub async fn update(
    pool: &Pool<Postgres>,
    criminal_id: i64,
    req: &UpdateCriminalRequest,
) -> Result<Option<CriminalResponse>, AppError> {
    let row = sqlx::query_as::<_, CriminalRow>(&format!(
        r#"UPDATE criminal SET
               name    = COALESCE($2, name),
               age     = COALESCE($3, age),
               gender  = COALESCE($4, gender),
               address = COALESCE($5, address),
               status  = COALESCE($6, status)
           WHERE criminal_id = $1
           RETURNING {COLUMNS}"#
    ))
    .bind(criminal_id)
    .bind(req.name.as_deref())
    .bind(req.age)
    .bind(req.gender.map(|g| g.as_str()))
    .bind(req.address.as_deref())
    .bind(req.status.map(|s| s.as_str()))
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.map(CriminalResponse::from))
}

/// Delete a criminal record. Refused while any case still references the
/// record; callers surface this as a 409 so the operator can close out the
/// linked cases first. The check here gives the friendly message, while the
/// RESTRICT constraint on fir_criminal catches a link added between the
/// check and the DELETE (23503 also maps to a conflict).
pub async fn delete(pool: &Pool<Postgres>, criminal_id: i64) -> Result<bool, AppError> {
    let referenced = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM fir_criminal WHERE criminal_id = $1)",
    )
    .bind(criminal_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if referenced {
        return Err(AppError::conflict(
            "This criminal is linked to one or more cases and cannot be deleted",
        ));
    }

    let result = sqlx::query("DELETE FROM criminal WHERE criminal_id = $1")
        .bind(criminal_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
