//! Back-reference maintenance on the owner row.
//!
//! Both helpers take any `ConnectionTrait`, so resource adapters call them
//! with the same transaction that writes the child row.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QuerySelect, Set};
use uuid::Uuid;

use crate::auth::application::domain::entities::{OwnedCollection, UserId};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OwnerLinkError {
    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Owner link list is corrupt: {0}")]
    CorruptList(String),
}

impl From<DbErr> for OwnerLinkError {
    fn from(e: DbErr) -> Self {
        OwnerLinkError::DatabaseError(e.to_string())
    }
}

/// Appends `child_id` to the owner's list for `collection`.
pub async fn append_owner_link<C>(
    conn: &C,
    owner: UserId,
    collection: OwnedCollection,
    child_id: Uuid,
) -> Result<(), OwnerLinkError>
where
    C: ConnectionTrait,
{
    let mut links = load_links(conn, owner, collection).await?;
    links.push(child_id);
    store_links(conn, owner, collection, links).await
}

/// Removes `child_id` from the owner's list. Returns `false` when the owner
/// never referenced it, leaving the row untouched.
pub async fn remove_owner_link<C>(
    conn: &C,
    owner: UserId,
    collection: OwnedCollection,
    child_id: Uuid,
) -> Result<bool, OwnerLinkError>
where
    C: ConnectionTrait,
{
    let links = load_links(conn, owner, collection).await?;
    let before = links.len();
    let remaining: Vec<Uuid> = links.into_iter().filter(|id| *id != child_id).collect();

    if remaining.len() == before {
        return Ok(false);
    }

    store_links(conn, owner, collection, remaining).await?;
    Ok(true)
}

async fn load_links<C>(
    conn: &C,
    owner: UserId,
    collection: OwnedCollection,
) -> Result<Vec<Uuid>, OwnerLinkError>
where
    C: ConnectionTrait,
{
    // Row lock serialises concurrent read-modify-write of the same list
    let model = UserEntity::find_by_id(owner.value())
        .lock_exclusive()
        .one(conn)
        .await?
        .ok_or(OwnerLinkError::OwnerNotFound)?;

    model
        .links(collection)
        .map_err(|e| OwnerLinkError::CorruptList(e.to_string()))
}

async fn store_links<C>(
    conn: &C,
    owner: UserId,
    collection: OwnedCollection,
    links: Vec<Uuid>,
) -> Result<(), OwnerLinkError>
where
    C: ConnectionTrait,
{
    let value =
        serde_json::to_value(links).map_err(|e| OwnerLinkError::CorruptList(e.to_string()))?;

    let mut active = UserActiveModel {
        id: Set(owner.value()),
        ..Default::default()
    };

    match collection {
        OwnedCollection::Projects => active.projects = Set(value),
        OwnedCollection::Experiences => active.experiences = Set(value),
        OwnedCollection::Certifications => active.certifications = Set(value),
    }

    active.update(conn).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => OwnerLinkError::OwnerNotFound,
        other => OwnerLinkError::from(other),
    })?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;

    /// Owner row with the given project, experience and certification links.
    pub fn owner_model(
        id: Uuid,
        projects: Vec<Uuid>,
        experiences: Vec<Uuid>,
        certifications: Vec<Uuid>,
    ) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            email: "owner@example.com".to_string(),
            password_hash: "hashed".to_string(),
            skills: json!([]),
            projects: json!(projects),
            experiences: json!(experiences),
            certifications: json!(certifications),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}
