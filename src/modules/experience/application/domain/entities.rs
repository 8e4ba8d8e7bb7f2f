use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{require_fields, MissingFields};

/// Editable fields of a work experience. An empty `end_date` marks the
/// position as ongoing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ExperienceData {
    pub company_name: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Related project ids, kept as given.
    pub projects: Vec<String>,
    pub company_logo: String,
    pub certificate_url: String,
    pub images: Vec<String>,
}

impl ExperienceData {
    pub fn validate(&self) -> Result<(), MissingFields> {
        require_fields(&[
            ("company_name", &self.company_name),
            ("position", &self.position),
            ("start_date", &self.start_date),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Experience {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: ExperienceData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_position_is_reported() {
        let data: ExperienceData = serde_json::from_value(json!({
            "company_name": "Acme Corp",
            "position": "",
            "start_date": "2023-01"
        }))
        .unwrap();

        let err = data.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: position");
    }
}
