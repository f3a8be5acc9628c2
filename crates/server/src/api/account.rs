use dioxus::prelude::*;
use shared_types::{AuthUser, FeatureFlags};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Register a new operator account. Sets HTTP-only auth cookies on success.
/// For role `police`, `rank_title` and `station` seed the officer profile.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    username: String,
    password: String,
    name: String,
    role: shared_types::Role,
    rank_title: Option<String>,
    station: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use crate::repo;
    use shared_types::{AppError, CreateOperatorRequest};

    if !crate::config::feature_flags().open_registration {
        return Err(
            AppError::forbidden("Self-service registration is disabled").into_server_fn_error()
        );
    }

    let req = CreateOperatorRequest {
        username,
        password: password.clone(),
        name,
        role,
        rank_title,
        station,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = pw::hash_password(&password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let db = get_db().await;
    let user = repo::user::create(db, &req, &password_hash)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    let access_token = jwt::create_access_token(user.user_id, &user.username, user.role.as_str())
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    let (refresh_token, expires_at) =
        jwt::create_refresh_token(user.user_id, &user.username, user.role.as_str())
            .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user.user_id)
        .bind(&refresh_hash)
        .bind(expires_at)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    // Schedule cookies to be set by the middleware
    cookies::schedule_auth_cookies(&access_token, &refresh_token);

    Ok(AuthUser {
        user_id: user.user_id,
        username: user.username,
        name: user.name,
        role: user.role,
    })
}

/// Login with username and password. Sets HTTP-only auth cookies on success.
///
/// The role picked on the form is not an input here — the stored role comes
/// back in the response and the client routes on it.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(username: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use crate::repo;
    use shared_types::{AppError, Role};

    let db = get_db().await;
    let user = repo::user::find_auth_by_username(db, &username)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::unauthorized("Invalid username or password").into_server_fn_error()
        })?;

    let valid = pw::verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        return Err(
            AppError::unauthorized("Invalid username or password").into_server_fn_error()
        );
    }

    let access_token = jwt::create_access_token(user.user_id, &user.username, &user.role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    let (refresh_token, expires_at) =
        jwt::create_refresh_token(user.user_id, &user.username, &user.role)
            .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let refresh_hash = jwt::hash_token(&refresh_token);
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user.user_id)
        .bind(&refresh_hash)
        .bind(expires_at)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    cookies::schedule_auth_cookies(&access_token, &refresh_token);

    Ok(AuthUser {
        user_id: user.user_id,
        username: user.username,
        name: user.name,
        role: Role::from_str_or_default(&user.role),
    })
}

/// Resolve the current session from cookies. Returns None when signed out.
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::{cookies, jwt};

    let ctx = match dioxus::fullstack::FullstackContext::current() {
        Some(c) => c,
        None => return Ok(None),
    };

    let parts = ctx.parts_mut();

    // Primary: read Claims from extensions (auth_middleware already validated)
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return fetch_auth_user(claims.sub).await;
    }

    // Fallback: parse cookies directly (covers cases where middleware didn't run)
    let headers = parts.headers.clone();

    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = jwt::validate_access_token(&token) {
            return fetch_auth_user(claims.sub).await;
        }
    }

    if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
        if let Ok(claims) = jwt::validate_refresh_token(&refresh_token) {
            let db = get_db().await;
            let token_hash = jwt::hash_token(&refresh_token);
            let stored = sqlx::query_as::<_, (i64, bool)>(
                "SELECT id, revoked FROM refresh_tokens WHERE token_hash = $1 AND user_id = $2",
            )
            .bind(&token_hash)
            .bind(claims.sub)
            .fetch_optional(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;

            if let Some((_, revoked)) = stored {
                if !revoked {
                    return fetch_auth_user(claims.sub).await;
                }
            }
        }
    }

    Ok(None)
}

/// Logout by revoking all refresh tokens and clearing auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};

    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let headers = ctx.parts_mut().headers.clone();
        if let Some(token) = cookies::extract_access_token(&headers) {
            if let Ok(claims) = jwt::validate_access_token(&token) {
                let db = get_db().await;
                let _ = sqlx::query(
                    "UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE",
                )
                .bind(claims.sub)
                .execute(db)
                .await;
            }
        }
    }

    // Schedule cookie clearing via middleware
    cookies::schedule_clear_cookies();

    Ok(())
}

/// Fetch the server's feature flags for client-side gating.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags())
}
