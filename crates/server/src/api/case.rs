use dioxus::prelude::*;
use shared_types::{CaseResponse, CreateCaseRequest, UpdateCaseRequest};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// List all FIR cases with their linked criminals, newest first.
#[server]
pub async fn list_cases() -> Result<Vec<CaseResponse>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    crate::repo::case::list(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Fetch a single case with its linked criminals.
#[server]
pub async fn get_case(fir_id: i64) -> Result<CaseResponse, ServerFnError> {
    use shared_types::AppError;

    require_auth()?;
    let db = get_db().await;
    crate::repo::case::find_by_id(db, fir_id)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("Case {fir_id} not found")).into_server_fn_error()
        })
}

/// Register a new FIR case. At least one linked criminal is required.
/// Court operators cannot file cases.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn create_case(req: CreateCaseRequest) -> Result<CaseResponse, ServerFnError> {
    require_role(RECORD_WRITERS)?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    crate::repo::case::create(db, &req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Partial update of a case. When `criminal_ids` is present the link set is
/// replaced wholesale. What a caller may touch depends on their role: police
/// maintain the FIR side, court records the outcome, admins do both.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn update_case(
    fir_id: i64,
    req: UpdateCaseRequest,
) -> Result<CaseResponse, ServerFnError> {
    use shared_types::{AppError, Role};

    let claims = require_auth()?;
    authorize_case_update(Role::from_str_or_default(&claims.role), &req)
        .map_err(|e| e.into_server_fn_error())?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    crate::repo::case::update(db, fir_id, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("Case {fir_id} not found")).into_server_fn_error()
        })
}

/// Delete a case. Criminal records survive; only the links go away.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_case(fir_id: i64) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    require_role(RECORD_WRITERS)?;
    let db = get_db().await;
    let deleted = crate::repo::case::delete(db, fir_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if deleted {
        Ok(())
    } else {
        Err(AppError::not_found(format!("Case {fir_id} not found")).into_server_fn_error())
    }
}

/// Per-role field policy for case updates.
///
/// Police own the FIR side but not the outcome; court operators record the
/// verdict and punishment (plus the case status, which closes out a case)
/// and nothing else; admins are unrestricted.
#[cfg(feature = "server")]
fn authorize_case_update(
    role: shared_types::Role,
    req: &UpdateCaseRequest,
) -> Result<(), shared_types::AppError> {
    use shared_types::{AppError, Role};

    let touches_verdict = req.verdict.is_some()
        || req.punishment_type.is_some()
        || req.punishment_duration_years.is_some()
        || req.punishment_start_date.is_some();
    let touches_fir = req.officer_id.is_some()
        || req.fir_date.is_some()
        || req.crime_type.is_some()
        || req.crime_date.is_some()
        || req.crime_description.is_some()
        || req.criminal_ids.is_some();

    match role {
        Role::Admin => Ok(()),
        Role::Police if touches_verdict => Err(AppError::forbidden(
            "Only court operators can record verdicts",
        )),
        Role::Court if touches_fir => Err(AppError::forbidden(
            "Court operators may only update the verdict and punishment",
        )),
        Role::Police | Role::Court => Ok(()),
    }
}
