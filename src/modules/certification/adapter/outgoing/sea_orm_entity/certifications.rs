use sea_orm::entity::prelude::*;
use sea_orm::Set;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::{
    Certification, CertificationData,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub projects: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    #[sea_orm(column_type = "Text")]
    pub certificate_url: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(column_type = "Text")]
    pub issuer: String,

    #[sea_orm(column_type = "Text")]
    pub issue_date: String,

    #[sea_orm(column_type = "Text")]
    pub expiry_date: String,

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
    pub fn apply(&mut self, data: CertificationData) -> Result<(), serde_json::Error> {
        self.title = Set(data.title.trim().to_string());
        self.description = Set(data.description);
        self.projects = Set(serde_json::to_value(data.projects)?);
        self.skills = Set(serde_json::to_value(data.skills)?);
        self.certificate_url = Set(data.certificate_url);
        self.images = Set(serde_json::to_value(data.images)?);
        self.issuer = Set(data.issuer);
        self.issue_date = Set(data.issue_date);
        self.expiry_date = Set(data.expiry_date);
        Ok(())
    }
}

impl Model {
    pub fn to_domain(&self) -> Result<Certification, serde_json::Error> {
        Ok(Certification {
            id: self.id,
            data: CertificationData {
                title: self.title.clone(),
                description: self.description.clone(),
                projects: serde_json::from_value(self.projects.clone())?,
                skills: serde_json::from_value(self.skills.clone())?,
                certificate_url: self.certificate_url.clone(),
                images: serde_json::from_value(self.images.clone())?,
                issuer: self.issuer.clone(),
                issue_date: self.issue_date.clone(),
                expiry_date: self.expiry_date.clone(),
            },
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
