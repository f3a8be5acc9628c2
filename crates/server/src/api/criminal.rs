use dioxus::prelude::*;
use shared_types::{CreateCriminalRequest, CriminalResponse, UpdateCriminalRequest};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// List all criminal records, newest first.
#[server]
pub async fn list_criminals() -> Result<Vec<CriminalResponse>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    crate::repo::criminal::list(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Fetch a single criminal record.
#[server]
pub async fn get_criminal(criminal_id: i64) -> Result<CriminalResponse, ServerFnError> {
    use shared_types::AppError;

    require_auth()?;
    let db = get_db().await;
    crate::repo::criminal::find_by_id(db, criminal_id)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("Criminal {criminal_id} not found")).into_server_fn_error()
        })
}

/// Create a criminal record. Court operators are read-only here.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn create_criminal(req: CreateCriminalRequest) -> Result<CriminalResponse, ServerFnError> {
    require_role(RECORD_WRITERS)?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    crate::repo::criminal::create(db, &req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Partial update of a criminal record.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn update_criminal(
    criminal_id: i64,
    req: UpdateCriminalRequest,
) -> Result<CriminalResponse, ServerFnError> {
    use shared_types::AppError;

    require_role(RECORD_WRITERS)?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    crate::repo::criminal::update(db, criminal_id, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("Criminal {criminal_id} not found")).into_server_fn_error()
        })
}

/// Delete a criminal record. Fails with a conflict while any case still
/// references it.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_criminal(criminal_id: i64) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    require_role(RECORD_WRITERS)?;
    let db = get_db().await;
    let deleted = crate::repo::criminal::delete(db, criminal_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if deleted {
        Ok(())
    } else {
        Err(AppError::not_found(format!("Criminal {criminal_id} not found"))
            .into_server_fn_error())
    }
}
