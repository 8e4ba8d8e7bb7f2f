use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    Column, Entity, Model,
};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain_list(models)
    }

    async fn get_by_id(
        &self,
        experience_id: Uuid,
    ) -> Result<Option<Experience>, ExperienceQueryError> {
        let model = Entity::find_by_id(experience_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(|m| m.to_domain())
            .transpose()
            .map_err(|e| ExperienceQueryError::SerializationError(e.to_string()))
    }
}

fn to_domain_list(models: Vec<Model>) -> Result<Vec<Experience>, ExperienceQueryError> {
    models
        .iter()
        .map(Model::to_domain)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ExperienceQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
