use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QuerySelect, Set,
    TransactionTrait,
};
use serde_json::json;
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn corrupt(e: serde_json::Error) -> UserRepositoryError {
    UserRepositoryError::CorruptRecord(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(data.id),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            skills: Set(json!([])),
            projects: Set(json!([])),
            experiences: Set(json!([])),
            certifications: Set(json!([])),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::UserAlreadyExists;
            }
            map_db_err(e)
        })?;

        inserted.to_domain().map_err(corrupt)
    }

    async fn append_skills(
        &self,
        owner: UserId,
        skills: Vec<String>,
    ) -> Result<Vec<String>, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = async {
            let user = UserEntity::find_by_id(owner.value())
                .lock_exclusive()
                .one(&txn)
                .await
                .map_err(map_db_err)?
                .ok_or(UserRepositoryError::UserNotFound)?;

            let mut current: Vec<String> =
                serde_json::from_value(user.skills.clone()).map_err(corrupt)?;
            current.extend(skills);

            let mut active_user: UserActiveModel = user.into();
            active_user.skills = Set(json!(current));
            active_user.update(&txn).await.map_err(map_db_err)?;

            Ok::<_, UserRepositoryError>(current)
        }
        .await;

        match result {
            Ok(updated) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(updated)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
