use shared_types::{AppError, OfficerResponse};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, sqlx::FromRow)]
struct OfficerRow {
    officer_id: i64,
    user_id: i64,
    name: String,
    rank_title: Option<String>,
    station: Option<String>,
}

impl From<OfficerRow> for OfficerResponse {
    fn from(row: OfficerRow) -> Self {
        OfficerResponse {
            officer_id: row.officer_id,
            user_id: row.user_id,
            name: row.name,
            rank_title: row.rank_title,
            station: row.station,
        }
    }
}

/// Find the officer profile belonging to a user account.
pub async fn find_by_user_id(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<Option<OfficerResponse>, AppError> {
    let row = sqlx::query_as::<_, OfficerRow>(
        r#"SELECT o.officer_id, o.user_id, u.name, o.rank_title, o.station
           FROM police_officer o
           JOIN users u ON u.user_id = o.user_id
           WHERE o.user_id = $1"#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.map(OfficerResponse::from))
}

/// List all officer profiles, for the case form's officer picker.
pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<OfficerResponse>, AppError> {
    let rows = sqlx::query_as::<_, OfficerRow>(
        r#"SELECT o.officer_id, o.user_id, u.name, o.rank_title, o.station
           FROM police_officer o
           JOIN users u ON u.user_id = o.user_id
           ORDER BY u.name ASC"#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows.into_iter().map(OfficerResponse::from).collect())
}
