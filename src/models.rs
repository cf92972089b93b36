//! Remote resource snapshots.
//!
//! Every value here is a read-only picture of what the server returned for one
//! command invocation. Updates never mutate a snapshot in place; the server's
//! response becomes the new snapshot.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Project status as stored by the API (wire codes 1/4/5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum ProjectStatus {
    Active,
    Deleted,
    Archived,
}

impl ProjectStatus {
    pub fn code(&self) -> i64 {
        match self {
            ProjectStatus::Active => 1,
            ProjectStatus::Deleted => 4,
            ProjectStatus::Archived => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Deleted => "deleted",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl TryFrom<i64> for ProjectStatus {
    type Error = String;

    fn try_from(code: i64) -> std::result::Result<Self, Self::Error> {
        match code {
            1 => Ok(ProjectStatus::Active),
            4 => Ok(ProjectStatus::Deleted),
            5 => Ok(ProjectStatus::Archived),
            other => Err(format!("unknown project status code: {}", other)),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
}

/// The section name is denormalized by the API so tasks can be displayed and
/// filtered without a second round trip.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
    pub section_id: i64,
    pub section_name: String,
    pub created_at: DateTime<Utc>,
}

/// Structured error payload the API embeds in otherwise well-formed responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub status: Option<i64>,
}
