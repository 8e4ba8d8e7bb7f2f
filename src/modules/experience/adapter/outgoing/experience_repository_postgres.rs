use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::owner_links::{
    append_owner_link, remove_owner_link, OwnerLinkError,
};
use crate::auth::application::domain::entities::{OwnedCollection, UserId};
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    ActiveModel, Entity,
};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceData};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create_for_owner(
        &self,
        owner: UserId,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        model.apply(data).map_err(map_json_err)?;

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = async {
            let inserted = model.insert(&txn).await.map_err(map_db_err)?;

            append_owner_link(&txn, owner, OwnedCollection::Experiences, inserted.id)
                .await
                .map_err(map_link_err)?;

            inserted.to_domain().map_err(map_json_err)
        }
        .await;

        match result {
            Ok(experience) => {
                txn.commit().await.map_err(map_db_err)?;
                tracing::debug!(
                    experience_id = %experience.id,
                    owner = %owner,
                    "Experience linked to owner"
                );
                Ok(experience)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update(
        &self,
        experience_id: Uuid,
        data: ExperienceData,
    ) -> Result<(), ExperienceRepositoryError> {
        let mut model = ActiveModel {
            id: Set(experience_id),
            ..Default::default()
        };
        model.apply(data).map_err(map_json_err)?;

        model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ExperienceRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(())
    }

    async fn delete_for_owner(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = async {
            let referenced =
                remove_owner_link(&txn, owner, OwnedCollection::Experiences, experience_id)
                    .await
                    .map_err(map_link_err)?;

            if !referenced {
                return Err(ExperienceRepositoryError::NotFound);
            }

            let deleted = Entity::delete_by_id(experience_id)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;

            if deleted.rows_affected == 0 {
                return Err(ExperienceRepositoryError::NotFound);
            }

            Ok(())
        }
        .await;

        match result {
            Ok(()) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(())
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> ExperienceRepositoryError {
    ExperienceRepositoryError::SerializationError(e.to_string())
}

fn map_link_err(e: OwnerLinkError) -> ExperienceRepositoryError {
    match e {
        OwnerLinkError::OwnerNotFound => ExperienceRepositoryError::OwnerNotFound,
        OwnerLinkError::DatabaseError(msg) => ExperienceRepositoryError::DatabaseError(msg),
        OwnerLinkError::CorruptList(msg) => ExperienceRepositoryError::SerializationError(msg),
    }
}
