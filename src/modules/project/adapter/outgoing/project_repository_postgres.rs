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
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{ActiveModel, Entity};
use crate::modules::project::application::domain::entities::{Project, ProjectData};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_for_owner(
        &self,
        owner: UserId,
        data: ProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
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

            append_owner_link(&txn, owner, OwnedCollection::Projects, inserted.id)
                .await
                .map_err(map_link_err)?;

            inserted.to_domain().map_err(map_json_err)
        }
        .await;

        match result {
            Ok(project) => {
                txn.commit().await.map_err(map_db_err)?;
                tracing::debug!(
                    project_id = %project.id,
                    owner = %owner,
                    "Project linked to owner"
                );
                Ok(project)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update(
        &self,
        project_id: Uuid,
        data: ProjectData,
    ) -> Result<(), ProjectRepositoryError> {
        let mut model = ActiveModel {
            id: Set(project_id),
            ..Default::default()
        };
        model.apply(data).map_err(map_json_err)?;

        model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ProjectRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(())
    }

    async fn delete_for_owner(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = async {
            let referenced =
                remove_owner_link(&txn, owner, OwnedCollection::Projects, project_id)
                    .await
                    .map_err(map_link_err)?;

            if !referenced {
                return Err(ProjectRepositoryError::NotFound);
            }

            let deleted = Entity::delete_by_id(project_id)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;

            if deleted.rows_affected == 0 {
                return Err(ProjectRepositoryError::NotFound);
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

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> ProjectRepositoryError {
    ProjectRepositoryError::SerializationError(e.to_string())
}

fn map_link_err(e: OwnerLinkError) -> ProjectRepositoryError {
    match e {
        OwnerLinkError::OwnerNotFound => ProjectRepositoryError::OwnerNotFound,
        OwnerLinkError::DatabaseError(msg) => ProjectRepositoryError::DatabaseError(msg),
        OwnerLinkError::CorruptList(msg) => ProjectRepositoryError::SerializationError(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    use crate::auth::adapter::outgoing::owner_links::test_support::owner_model;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::test_support::project_model;
    use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Model;

    fn transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
        Arc::try_unwrap(db)
            .ok()
            .expect("connection still shared")
            .into_transaction_log()
    }

    fn data() -> ProjectData {
        ProjectData {
            project_name: "Portfolio".to_string(),
            small_description: "short".to_string(),
            description: "long".to_string(),
            skills: vec!["rust".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_inserts_and_links_in_one_transaction() {
        let owner = Uuid::new_v4();
        let project_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // INSERT ... RETURNING
            .append_query_results(vec![vec![project_model(
                project_id,
                "Portfolio",
                &["rust"],
                0,
            )]])
            // owner row, then the updated owner row
            .append_query_results(vec![vec![owner_model(owner, vec![], vec![], vec![])]])
            .append_query_results(vec![vec![owner_model(
                owner,
                vec![project_id],
                vec![],
                vec![],
            )]])
            .into_connection();
        let db = Arc::new(db);

        let project = ProjectRepositoryPostgres::new(Arc::clone(&db))
            .create_for_owner(UserId::from(owner), data())
            .await
            .unwrap();

        assert_eq!(project.id, project_id);
        assert_eq!(project.data.skills, vec!["rust".to_string()]);

        let log = transaction_log(db);
        assert_eq!(log.len(), 1, "all statements share one transaction");
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("INSERT INTO"));
        assert!(sql.contains("UPDATE"));
    }

    #[tokio::test]
    async fn create_without_owner_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![project_model(Uuid::new_v4(), "x", &[], 0)]])
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let result = ProjectRepositoryPostgres::new(Arc::new(db))
            .create_for_owner(UserId::from(Uuid::new_v4()), data())
            .await;

        assert!(matches!(result, Err(ProjectRepositoryError::OwnerNotFound)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let result = ProjectRepositoryPostgres::new(Arc::new(db))
            .update(Uuid::new_v4(), data())
            .await;

        assert!(matches!(result, Err(ProjectRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn update_replaces_domain_fields() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![project_model(id, "Portfolio", &["rust"], 0)]])
            .into_connection();

        let result = ProjectRepositoryPostgres::new(Arc::new(db))
            .update(id, data())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_prunes_link_then_row() {
        let owner = Uuid::new_v4();
        let project_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![owner_model(
                owner,
                vec![project_id],
                vec![],
                vec![],
            )]])
            .append_query_results(vec![vec![owner_model(owner, vec![], vec![], vec![])]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let db = Arc::new(db);

        ProjectRepositoryPostgres::new(Arc::clone(&db))
            .delete_for_owner(UserId::from(owner), project_id)
            .await
            .unwrap();

        let sql = format!("{:?}", transaction_log(db));
        let update_at = sql.find("UPDATE").unwrap();
        let delete_at = sql.find("DELETE FROM").unwrap();
        assert!(update_at < delete_at);
    }

    #[tokio::test]
    async fn delete_of_unreferenced_id_is_not_found() {
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![owner_model(
                owner,
                vec![Uuid::new_v4()],
                vec![],
                vec![],
            )]])
            .into_connection();

        let result = ProjectRepositoryPostgres::new(Arc::new(db))
            .delete_for_owner(UserId::from(owner), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(ProjectRepositoryError::NotFound)));
    }
}
