use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::models::{CaseStatus, CriminalStatus, Gender, Role, Verdict};

/// Login request. The `role` selected on the form travels along but the
/// server authenticates on username + password only and returns the stored
/// role; clients must route by the response, not by this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Request DTO for creating an operator account (signup and admin add-operator
/// share this shape). For role `police` the optional rank/station fields seed
/// the 1:1 officer profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(deny_unknown_fields)]
pub struct CreateOperatorRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Username must be at least 3 characters"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

/// Partial operator update. `password: None` leaves the stored credential
/// untouched; the UI only fills it when the user typed a new non-empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(deny_unknown_fields)]
pub struct UpdateOperatorRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Username must be at least 3 characters"))
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password must not be blank"))
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(deny_unknown_fields)]
pub struct CreateCriminalRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub address: Option<String>,
    /// Defaults to `Under Trial` when absent.
    #[serde(default)]
    pub status: Option<CriminalStatus>,
}

/// Partial criminal update. Absent fields keep their stored values; a field
/// cannot be cleared back to NULL through this request, only given a new
/// value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(deny_unknown_fields)]
pub struct UpdateCriminalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CriminalStatus>,
}

/// Request DTO for registering a FIR case. At least one criminal must be
/// linked; the client enforces this before any request is sent and the server
/// rejects an empty list as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(deny_unknown_fields)]
pub struct CreateCaseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officer_id: Option<i64>,
    pub fir_date: NaiveDate,
    #[serde(default)]
    pub crime_type: Option<String>,
    #[serde(default)]
    pub crime_date: Option<NaiveDate>,
    #[serde(default)]
    pub crime_description: Option<String>,
    #[serde(default)]
    pub case_status: Option<CaseStatus>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
    #[serde(default)]
    pub punishment_type: Option<String>,
    #[serde(default)]
    pub punishment_duration_years: Option<i32>,
    #[serde(default)]
    pub punishment_start_date: Option<NaiveDate>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select at least one criminal"))
    )]
    pub criminal_ids: Vec<i64>,
}

/// Partial case update. When `criminal_ids` is present the association set is
/// replaced wholesale; when absent the existing links are kept. Absent scalar
/// fields keep their stored values; a field cannot be cleared back to NULL
/// through this request, only given a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(deny_unknown_fields)]
pub struct UpdateCaseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fir_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crime_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crime_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_status: Option<CaseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punishment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punishment_duration_years: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punishment_start_date: Option<NaiveDate>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select at least one criminal"))
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criminal_ids: Option<Vec<i64>>,
}

/// Generic confirmation payload for operations without a richer response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}
