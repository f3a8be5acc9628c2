use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Extension trait providing `.into_app_error()` on sqlx::Error.
///
/// Unique violations (23505) become 409s with a message the UI can show
/// as-is; the constraint name tells us which field collided.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        match &self {
            sqlx::Error::RowNotFound => AppError::not_found("Resource not found"),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => {
                    let detail = db_err.message();
                    if detail.contains("username") {
                        AppError::conflict("This username is already taken")
                    } else if detail.contains("police_officer") {
                        AppError::conflict("An officer profile already exists for this user")
                    } else {
                        AppError::conflict("A record with this value already exists")
                    }
                }
                // Foreign key violation: referenced row missing, or still in use
                Some("23503") => {
                    AppError::conflict("A referenced record does not exist or is still in use")
                }
                _ => AppError::database(self.to_string()),
            },
            _ => AppError::database(self.to_string()),
        }
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
/// The whole error serializes as JSON so the client can recover the kind
/// and per-field messages.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        let json = serde_json::to_string(&self).unwrap_or_else(|_| self.message.clone());
        ServerFnError::new(json)
    }
}

/// Run validator-derived checks and surface failures as a 422 AppError.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
