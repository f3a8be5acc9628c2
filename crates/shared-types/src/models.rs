use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator account role.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Police,
    Court,
}

pub const ROLES: [&str; 3] = ["admin", "police", "court"];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Police => "police",
            Role::Court => "court",
        }
    }

    /// Parse a stored role string, defaulting to `Police` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "court" => Role::Court,
            _ => Role::Police,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Gender {
    Male,
    Female,
    Other,
}

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criminal record status. Wire spelling keeps the original space-separated
/// form ("Under Trial").
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum CriminalStatus {
    #[default]
    #[serde(rename = "Under Trial")]
    UnderTrial,
    Released,
    Convicted,
}

pub const CRIMINAL_STATUSES: [&str; 3] = ["Under Trial", "Released", "Convicted"];

impl CriminalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriminalStatus::UnderTrial => "Under Trial",
            CriminalStatus::Released => "Released",
            CriminalStatus::Convicted => "Convicted",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Released" => CriminalStatus::Released,
            "Convicted" => CriminalStatus::Convicted,
            _ => CriminalStatus::UnderTrial,
        }
    }
}

impl fmt::Display for CriminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum CaseStatus {
    #[default]
    Open,
    #[serde(rename = "In Court")]
    InCourt,
    Closed,
}

pub const CASE_STATUSES: [&str; 3] = ["Open", "In Court", "Closed"];

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::InCourt => "In Court",
            CaseStatus::Closed => "Closed",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "In Court" => CaseStatus::InCourt,
            "Closed" => CaseStatus::Closed,
            _ => CaseStatus::Open,
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Verdict {
    #[default]
    Pending,
    Guilty,
    #[serde(rename = "Not Guilty")]
    NotGuilty,
}

pub const VERDICTS: [&str; 3] = ["Pending", "Guilty", "Not Guilty"];

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pending => "Pending",
            Verdict::Guilty => "Guilty",
            Verdict::NotGuilty => "Not Guilty",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Guilty" => Verdict::Guilty,
            "Not Guilty" => Verdict::NotGuilty,
            _ => Verdict::Pending,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operator account as returned by the API. Password never leaves the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub role: Role,
}

/// Police-specific profile, 1:1 with a user of role `police`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OfficerResponse {
    pub officer_id: i64,
    pub user_id: i64,
    pub name: String,
    pub rank_title: Option<String>,
    pub station: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CriminalResponse {
    pub criminal_id: i64,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub status: CriminalStatus,
}

/// A FIR case with its linked criminals and owning officer resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseResponse {
    pub fir_id: i64,
    pub officer_id: Option<i64>,
    /// Convenience field resolved from the owning officer's user record.
    pub officer_name: Option<String>,
    pub fir_date: NaiveDate,
    pub case_status: CaseStatus,
    pub crime_type: Option<String>,
    pub crime_date: Option<NaiveDate>,
    pub crime_description: Option<String>,
    pub verdict: Verdict,
    pub punishment_type: Option<String>,
    pub punishment_duration_years: Option<i32>,
    pub punishment_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub criminals: Vec<CriminalResponse>,
}

/// Feature flags loaded from `config.toml` on the server and fetched by the
/// client at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FeatureFlags {
    /// Export HTTP spans via OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Allow self-service signup on the login screen. When off, only an
    /// admin can create operator accounts.
    #[serde(default = "default_true")]
    pub open_registration: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        FeatureFlags {
            telemetry: false,
            open_registration: true,
        }
    }
}

/// Top-level shape of `config.toml`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

/// The authenticated session identity held client-side and returned by
/// login / get_current_user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub role: Role,
}
