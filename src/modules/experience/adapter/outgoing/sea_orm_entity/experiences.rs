use sea_orm::entity::prelude::*;
use sea_orm::Set;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceData};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub company_name: String,

    #[sea_orm(column_type = "Text")]
    pub position: String,

    #[sea_orm(column_type = "Text")]
    pub start_date: String,

    // empty while the position is ongoing
    #[sea_orm(column_type = "Text")]
    pub end_date: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub projects: Json,

    #[sea_orm(column_type = "Text")]
    pub company_logo: String,

    #[sea_orm(column_type = "Text")]
    pub certificate_url: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}

impl ActiveModel {
    /// Sets every domain column from `data`, leaving id and timestamps alone.
    pub fn apply(&mut self, data: ExperienceData) -> Result<(), serde_json::Error> {
        self.company_name = Set(data.company_name.trim().to_string());
        self.position = Set(data.position);
        self.start_date = Set(data.start_date);
        self.end_date = Set(data.end_date);
        self.description = Set(data.description);
        self.technologies = Set(serde_json::to_value(data.technologies)?);
        self.projects = Set(serde_json::to_value(data.projects)?);
        self.company_logo = Set(data.company_logo);
        self.certificate_url = Set(data.certificate_url);
        self.images = Set(serde_json::to_value(data.images)?);
        Ok(())
    }
}

impl Model {
    pub fn to_domain(&self) -> Result<Experience, serde_json::Error> {
        Ok(Experience {
            id: self.id,
            data: ExperienceData {
                company_name: self.company_name.clone(),
                position: self.position.clone(),
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
                description: self.description.clone(),
                technologies: serde_json::from_value(self.technologies.clone())?,
                projects: serde_json::from_value(self.projects.clone())?,
                company_logo: self.company_logo.clone(),
                certificate_url: self.certificate_url.clone(),
                images: serde_json::from_value(self.images.clone())?,
            },
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
