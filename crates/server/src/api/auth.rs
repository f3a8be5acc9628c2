// Server-only auth helpers for server functions.
// These are shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::AuthUser;

use crate::db::get_db;
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
/// Returns the validated Claims or an "Authentication required" error.
pub(crate) fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse access token from cookies/Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Require the caller to be authenticated with the "admin" role.
pub(crate) fn require_admin() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use shared_types::AppError;

    let claims = require_auth()?;
    if claims.role != "admin" {
        return Err(AppError::forbidden("Admin role required").into_server_fn_error());
    }
    Ok(claims)
}

/// Roles that register and maintain criminal records and FIR cases.
/// Court operators get read access plus verdict updates, nothing else.
pub(crate) const RECORD_WRITERS: &[shared_types::Role] =
    &[shared_types::Role::Admin, shared_types::Role::Police];

/// Require the caller to be authenticated with one of the given roles.
pub(crate) fn require_role(
    allowed: &[shared_types::Role],
) -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use shared_types::{AppError, Role};

    let claims = require_auth()?;
    if !allowed.contains(&Role::from_str_or_default(&claims.role)) {
        return Err(
            AppError::forbidden("Your role does not permit this action").into_server_fn_error()
        );
    }
    Ok(claims)
}

/// Fetch the session identity by user ID. Returns None if the account has
/// been deleted since the token was issued.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    use shared_types::Role;

    let db = get_db().await;
    let row = sqlx::query_as::<_, (i64, String, String, String)>(
        "SELECT user_id, username, name, role FROM users WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(row.map(|(user_id, username, name, role)| AuthUser {
        user_id,
        username,
        name,
        role: Role::from_str_or_default(&role),
    }))
}
