use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{require_fields, MissingFields};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CertificationData {
    pub title: String,
    pub description: String,
    /// Related project ids, kept as given.
    pub projects: Vec<String>,
    pub skills: Vec<String>,
    pub certificate_url: String,
    pub images: Vec<String>,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: String,
}

impl CertificationData {
    pub fn validate(&self) -> Result<(), MissingFields> {
        require_fields(&[
            ("title", &self.title),
            ("description", &self.description),
            ("issuer", &self.issuer),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Certification {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: CertificationData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
