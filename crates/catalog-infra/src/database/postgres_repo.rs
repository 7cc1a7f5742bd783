//! PostgreSQL content store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use catalog_core::RepoError;
use catalog_core::domain::{Content, ContentDto};
use catalog_core::ports::ContentStore;

use super::entity::content::{self, ActiveModel, Entity as ContentEntity};

/// Content store backed by the `content` table.
///
/// Updates are a read-modify-write of the whole row; concurrent writers to
/// the same ID are last-write-wins.
pub struct PostgresContentStore {
    db: DbConn,
}

impl PostgresContentStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn repo_error(err: DbErr) -> RepoError {
    let message = err.to_string();
    match err {
        DbErr::Conn(_) => RepoError::Connection(message),
        _ if message.contains("duplicate") || message.contains("unique") => {
            RepoError::Constraint(message)
        }
        _ => RepoError::Query(message),
    }
}

#[async_trait]
impl ContentStore for PostgresContentStore {
    async fn list_all(&self) -> Result<Vec<Content>, RepoError> {
        let rows = ContentEntity::find()
            .order_by_asc(content::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Content>, RepoError> {
        let row = ContentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, dto: ContentDto) -> Result<Option<Content>, RepoError> {
        let Some(content) = Content::from_dto(dto) else {
            tracing::debug!("Rejected content without a title");
            return Ok(None);
        };

        let row = ActiveModel::from(content)
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(content_id = %row.id, "Inserted content row");
        Ok(Some(row.into()))
    }

    async fn update(&self, id: Uuid, dto: ContentDto) -> Result<Option<Content>, RepoError> {
        let Some(row) = ContentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_error)?
        else {
            return Ok(None);
        };

        let mut content = Content::from(row);
        content.apply(dto);

        let row = ActiveModel::from(content)
            .update(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(Some(row.into()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Uuid>, RepoError> {
        let result = ContentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        Ok((result.rows_affected > 0).then_some(id))
    }
}
