use shared_types::{
    AppError, CreateOperatorRequest, Role, UpdateOperatorRequest, UserResponse,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Full user row including the password hash. Never leaves the server crate.
#[derive(Debug, sqlx::FromRow)]
pub struct UserAuthRow {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    username: String,
    name: String,
    role: String,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        UserResponse {
            user_id: row.user_id,
            username: row.username,
            name: row.name,
            role: Role::from_str_or_default(&row.role),
        }
    }
}

/// Insert a new operator account. For role `police` the officer profile row
/// is created in the same transaction.
pub async fn create(
    pool: &Pool<Postgres>,
    req: &CreateOperatorRequest,
    password_hash: &str,
) -> Result<UserResponse, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let row = sqlx::query_as::<_, UserRow>(
        r#"INSERT INTO users (username, password_hash, name, role)
           VALUES ($1, $2, $3, $4)
           RETURNING user_id, username, name, role"#,
    )
    .bind(&req.username)
    .bind(password_hash)
    .bind(&req.name)
    .bind(req.role.as_str())
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if req.role == Role::Police {
        sqlx::query(
            "INSERT INTO police_officer (user_id, rank_title, station) VALUES ($1, $2, $3)",
        )
        .bind(row.user_id)
        .bind(req.rank_title.as_deref())
        .bind(req.station.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.into())
}

/// Look up a user with password hash for credential verification.
pub async fn find_auth_by_username(
    pool: &Pool<Postgres>,
    username: &str,
) -> Result<Option<UserAuthRow>, AppError> {
    sqlx::query_as::<_, UserAuthRow>(
        "SELECT user_id, username, password_hash, name, role FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<Option<UserResponse>, AppError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT user_id, username, name, role FROM users WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.map(UserResponse::from))
}

/// List operator accounts, newest first, optionally restricted to one role.
pub async fn list(pool: &Pool<Postgres>, role: Option<Role>) -> Result<Vec<UserResponse>, AppError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"SELECT user_id, username, name, role FROM users
           WHERE $1::text IS NULL OR role = $1
           ORDER BY user_id DESC"#,
    )
    .bind(role.map(|r| r.as_str()))
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows.into_iter().map(UserResponse::from).collect())
}

/// Partial update of an operator account.
///
/// `password_hash` is `Some` only when the caller supplied a new password;
/// `None` preserves the stored credential. When the role changes to `police`
/// an officer profile is created if missing; changing away from `police`
/// removes the profile (case rows keep a NULL officer via FK).
pub async fn update(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: &UpdateOperatorRequest,
    password_hash: Option<&str>,
) -> Result<Option<UserResponse>, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let row = sqlx::query_as::<_, UserRow>(
        r#"UPDATE users SET
               username      = COALESCE($2, username),
               name          = COALESCE($3, name),
               role          = COALESCE($4, role),
               password_hash = COALESCE($5, password_hash),
               updated_at    = NOW()
           WHERE user_id = $1
           RETURNING user_id, username, name, role"#,
    )
    .bind(user_id)
    .bind(req.username.as_deref())
    .bind(req.name.as_deref())
    .bind(req.role.map(|r| r.as_str()))
    .bind(password_hash)
    .fetch_optional(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let Some(row) = row else {
        tx.rollback().await.ok();
        return Ok(None);
    };

    match Role::from_str_or_default(&row.role) {
        Role::Police => {
            sqlx::query(
                r#"INSERT INTO police_officer (user_id, rank_title, station)
                   VALUES ($1, $2, $3)
                   ON CONFLICT (user_id) DO UPDATE SET
                       rank_title = COALESCE($2, police_officer.rank_title),
                       station    = COALESCE($3, police_officer.station)"#,
            )
            .bind(user_id)
            .bind(req.rank_title.as_deref())
            .bind(req.station.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;
        }
        _ => {
            sqlx::query("DELETE FROM police_officer WHERE user_id = $1")
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(SqlxErrorExt::into_app_error)?;
        }
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(Some(row.into()))
}

/// Delete an operator account. The officer profile cascades; case rows keep
/// a NULL officer reference.
pub async fn delete(pool: &Pool<Postgres>, user_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
