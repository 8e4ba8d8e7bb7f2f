use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    Column, Entity, Model,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain_list(models)
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        let model = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(|m| m.to_domain())
            .transpose()
            .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Project>, ProjectQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Entity::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain_list(models)
    }
}

fn to_domain_list(models: Vec<Model>) -> Result<Vec<Project>, ProjectQueryError> {
    models
        .iter()
        .map(Model::to_domain)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
