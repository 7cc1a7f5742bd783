use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Content, ContentDto};
use crate::error::RepoError;

/// Content store - owns persistence, identity assignment and merge semantics.
///
/// `Ok(None)` is the store's way of saying "no such entity" (or, for
/// `create`, "nothing was created").
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All stored content, oldest first.
    async fn list_all(&self) -> Result<Vec<Content>, RepoError>;

    /// Find a content item by its ID.
    async fn get(&self, id: Uuid) -> Result<Option<Content>, RepoError>;

    /// Create a content item from a descriptor and assign it an ID.
    async fn create(&self, dto: ContentDto) -> Result<Option<Content>, RepoError>;

    /// Merge the fields present in `dto` onto an existing item.
    async fn update(&self, id: Uuid, dto: ContentDto) -> Result<Option<Content>, RepoError>;

    /// Remove an item, returning the ID that was removed.
    async fn delete(&self, id: Uuid) -> Result<Option<Uuid>, RepoError>;
}
