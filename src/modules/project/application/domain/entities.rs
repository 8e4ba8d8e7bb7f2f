use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{require_fields, MissingFields};

/// Editable fields of a project. Absent keys in a request body default to
/// empty, so required-field validation sees them as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ProjectData {
    pub project_name: String,
    pub small_description: String,
    pub description: String,
    pub skills: Vec<String>,
    pub project_repository: String,
    pub project_live_link: String,
    pub project_video: String,
}

impl ProjectData {
    pub fn validate(&self) -> Result<(), MissingFields> {
        require_fields(&[
            ("project_name", &self.project_name),
            ("small_description", &self.small_description),
            ("description", &self.description),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Project {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: ProjectData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
