use dioxus::prelude::*;
use shared_types::{CreateOperatorRequest, UpdateOperatorRequest, UserResponse};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// List all operator accounts. Admin only.
#[server]
pub async fn list_operators() -> Result<Vec<UserResponse>, ServerFnError> {
    require_admin()?;
    let db = get_db().await;
    crate::repo::user::list(db, None)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Create an operator account. Admin only — self-service signup goes
/// through `register` instead.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn create_operator(req: CreateOperatorRequest) -> Result<UserResponse, ServerFnError> {
    use crate::auth::password;
    use shared_types::AppError;

    require_admin()?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let db = get_db().await;
    crate::repo::user::create(db, &req, &password_hash)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Update an operator account. Admin only. An absent password in the
/// request leaves the stored credential unchanged.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn update_operator(
    user_id: i64,
    req: UpdateOperatorRequest,
) -> Result<UserResponse, ServerFnError> {
    use crate::auth::password;
    use shared_types::AppError;

    require_admin()?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = match &req.password {
        Some(pw) => Some(
            password::hash_password(pw)
                .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?,
        ),
        None => None,
    };

    let db = get_db().await;
    crate::repo::user::update(db, user_id, &req, password_hash.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("User {user_id} not found")).into_server_fn_error()
        })
}

/// Delete an operator account. Admin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_operator(user_id: i64) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    let claims = require_admin()?;
    if claims.sub == user_id {
        return Err(
            AppError::bad_request("You cannot delete your own account").into_server_fn_error()
        );
    }

    let db = get_db().await;
    let deleted = crate::repo::user::delete(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if deleted {
        Ok(())
    } else {
        Err(AppError::not_found(format!("User {user_id} not found")).into_server_fn_error())
    }
}
