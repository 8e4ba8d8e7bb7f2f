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
use crate::modules::certification::adapter::outgoing::sea_orm_entity::certifications::{
    ActiveModel, Entity,
};
use crate::modules::certification::application::domain::entities::{
    Certification, CertificationData,
};
use crate::modules::certification::application::ports::outgoing::{
    CertificationRepository, CertificationRepositoryError,
};

#[derive(Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificationRepository for CertificationRepositoryPostgres {
    async fn create_for_owner(
        &self,
        owner: UserId,
        data: CertificationData,
    ) -> Result<Certification, CertificationRepositoryError> {
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

            append_owner_link(&txn, owner, OwnedCollection::Certifications, inserted.id)
                .await
                .map_err(map_link_err)?;

            inserted.to_domain().map_err(map_json_err)
        }
        .await;

        match result {
            Ok(certification) => {
                txn.commit().await.map_err(map_db_err)?;
                tracing::debug!(
                    certification_id = %certification.id,
                    owner = %owner,
                    "Certification linked to owner"
                );
                Ok(certification)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update(
        &self,
        certification_id: Uuid,
        data: CertificationData,
    ) -> Result<(), CertificationRepositoryError> {
        let mut model = ActiveModel {
            id: Set(certification_id),
            ..Default::default()
        };
        model.apply(data).map_err(map_json_err)?;

        model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CertificationRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(())
    }

    async fn delete_for_owner(
        &self,
        owner: UserId,
        certification_id: Uuid,
    ) -> Result<(), CertificationRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = async {
            let referenced =
                remove_owner_link(&txn, owner, OwnedCollection::Certifications, certification_id)
                    .await
                    .map_err(map_link_err)?;

            if !referenced {
                return Err(CertificationRepositoryError::NotFound);
            }

            let deleted = Entity::delete_by_id(certification_id)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;

            if deleted.rows_affected == 0 {
                return Err(CertificationRepositoryError::NotFound);
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

fn map_db_err(e: DbErr) -> CertificationRepositoryError {
    CertificationRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> CertificationRepositoryError {
    CertificationRepositoryError::SerializationError(e.to_string())
}

fn map_link_err(e: OwnerLinkError) -> CertificationRepositoryError {
    match e {
        OwnerLinkError::OwnerNotFound => CertificationRepositoryError::OwnerNotFound,
        OwnerLinkError::DatabaseError(msg) => CertificationRepositoryError::DatabaseError(msg),
        OwnerLinkError::CorruptList(msg) => CertificationRepositoryError::SerializationError(msg),
    }
}
