use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectData};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub project_name: String,

    #[sea_orm(column_type = "Text")]
    pub small_description: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    #[sea_orm(column_type = "Text")]
    pub project_repository: String,

    #[sea_orm(column_type = "Text")]
    pub project_live_link: String,

    #[sea_orm(column_type = "Text")]
    pub project_video: String,

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
        if let ActiveValue::Set(name) = &self.project_name {
            self.project_name = Set(name.trim().to_string());
        }

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}

impl ActiveModel {
    /// Sets every domain column from `data`, leaving id and timestamps alone.
    pub fn apply(&mut self, data: ProjectData) -> Result<(), serde_json::Error> {
        self.project_name = Set(data.project_name);
        self.small_description = Set(data.small_description);
        self.description = Set(data.description);
        self.skills = Set(serde_json::to_value(data.skills)?);
        self.project_repository = Set(data.project_repository);
        self.project_live_link = Set(data.project_live_link);
        self.project_video = Set(data.project_video);
        Ok(())
    }
}

impl Model {
    pub fn to_domain(&self) -> Result<Project, serde_json::Error> {
        Ok(Project {
            id: self.id,
            data: ProjectData {
                project_name: self.project_name.clone(),
                small_description: self.small_description.clone(),
                description: self.description.clone(),
                skills: serde_json::from_value(self.skills.clone())?,
                project_repository: self.project_repository.clone(),
                project_live_link: self.project_live_link.clone(),
                project_video: self.project_video.clone(),
            },
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
