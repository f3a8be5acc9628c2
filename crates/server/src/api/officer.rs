use dioxus::prelude::*;
use shared_types::OfficerResponse;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

/// Fetch the officer profile for a user account. Returns None for accounts
/// without one (admin and court operators).
#[server]
pub async fn get_officer(user_id: i64) -> Result<Option<OfficerResponse>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    crate::repo::officer::find_by_user_id(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// List all officer profiles, for the case form's officer picker.
#[server]
pub async fn list_officers() -> Result<Vec<OfficerResponse>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    crate::repo::officer::list(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}
