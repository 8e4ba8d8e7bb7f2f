use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{OwnedCollection, User};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub projects: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub experiences: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub certifications: Json,
    pub created_at: DateTimeWithTimeZone,
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
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn links(&self, collection: OwnedCollection) -> Result<Vec<Uuid>, serde_json::Error> {
        let raw = match collection {
            OwnedCollection::Projects => &self.projects,
            OwnedCollection::Experiences => &self.experiences,
            OwnedCollection::Certifications => &self.certifications,
        };
        serde_json::from_value(raw.clone())
    }

    pub fn to_domain(&self) -> Result<User, serde_json::Error> {
        Ok(User {
            id: self.id,
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            skills: serde_json::from_value(self.skills.clone())?,
            projects: self.links(OwnedCollection::Projects)?,
            experiences: self.links(OwnedCollection::Experiences)?,
            certifications: self.links(OwnedCollection::Certifications)?,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
