use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certification::adapter::outgoing::sea_orm_entity::certifications::{
    Column, Entity, Model,
};
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::outgoing::{
    CertificationQuery, CertificationQueryError,
};

#[derive(Clone)]
pub struct CertificationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificationQuery for CertificationQueryPostgres {
    async fn list(&self) -> Result<Vec<Certification>, CertificationQueryError> {
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
        certification_id: Uuid,
    ) -> Result<Option<Certification>, CertificationQueryError> {
        let model = Entity::find_by_id(certification_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(|m| m.to_domain())
            .transpose()
            .map_err(|e| CertificationQueryError::SerializationError(e.to_string()))
    }
}

fn to_domain_list(models: Vec<Model>) -> Result<Vec<Certification>, CertificationQueryError> {
    models
        .iter()
        .map(Model::to_domain)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificationQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> CertificationQueryError {
    CertificationQueryError::DatabaseError(e.to_string())
}
