use axum::{extract::State, http::HeaderMap, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, AuthUser, LoginRequest, MessageResponse, Role};

use crate::auth::{cookies, jwt, password};
use crate::error_convert::SqlxErrorExt;
use crate::repo;

/// POST /login
///
/// Authenticates on username + password only. The role selected on the login
/// form travels in the request but is not checked here — the stored role is
/// returned and clients route on it.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthUser),
        (status = 401, description = "Invalid credentials", body = AppError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthUser>), AppError> {
    let user = repo::user::find_auth_by_username(&pool, &body.username)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

    let valid = password::verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()))?;
    if !valid {
        return Err(AppError::unauthorized("Invalid username or password"));
    }

    let access_token = jwt::create_access_token(user.user_id, &user.username, &user.role)
        .map_err(|e| AppError::internal(e.to_string()))?;
    let (refresh_token, expires_at) =
        jwt::create_refresh_token(user.user_id, &user.username, &user.role)
            .map_err(|e| AppError::internal(e.to_string()))?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user.user_id)
        .bind(&refresh_hash)
        .bind(expires_at)
        .execute(&pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let mut headers = HeaderMap::new();
    cookies::set_auth_cookies(&mut headers, &access_token, &refresh_token);

    tracing::info!(user_id = user.user_id, role = %user.role, "login");

    Ok((
        headers,
        Json(AuthUser {
            user_id: user.user_id,
            username: user.username,
            name: user.name,
            role: Role::from_str_or_default(&user.role),
        }),
    ))
}

/// POST /logout
///
/// Revokes all of the caller's refresh tokens and clears the auth cookies.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session cleared", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn logout(
    State(pool): State<Pool<Postgres>>,
    headers: HeaderMap,
) -> (HeaderMap, Json<MessageResponse>) {
    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = jwt::validate_access_token(&token) {
            let _ = sqlx::query(
                "UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE",
            )
            .bind(claims.sub)
            .execute(&pool)
            .await;
        }
    }

    let mut response_headers = HeaderMap::new();
    cookies::clear_auth_cookies(&mut response_headers);

    (
        response_headers,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
