//! In-memory content store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use catalog_core::RepoError;
use catalog_core::domain::{Content, ContentDto};
use catalog_core::ports::ContentStore;

/// Content store backed by a Vec behind an async RwLock.
///
/// Items are kept in creation order. Updates to the same ID are serialized
/// by the write lock.
/// Note: Data is lost on process restart.
pub struct InMemoryContentStore {
    items: RwLock<Vec<Content>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Pre-populate the store, e.g. with fixtures.
    pub fn with_items(items: impl IntoIterator<Item = Content>) -> Self {
        Self {
            items: RwLock::new(items.into_iter().collect()),
        }
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list_all(&self) -> Result<Vec<Content>, RepoError> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Content>, RepoError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, dto: ContentDto) -> Result<Option<Content>, RepoError> {
        let Some(content) = Content::from_dto(dto) else {
            tracing::debug!("Rejected content without a title");
            return Ok(None);
        };

        self.items.write().await.push(content.clone());
        Ok(Some(content))
    }

    async fn update(&self, id: Uuid, dto: ContentDto) -> Result<Option<Content>, RepoError> {
        let mut items = self.items.write().await;
        let Some(content) = items.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        content.apply(dto);
        Ok(Some(content.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Uuid>, RepoError> {
        let mut items = self.items.write().await;
        let Some(position) = items.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        Ok(Some(items.remove(position).id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::domain::{GenreChange, GenreMerge};

    fn titled(title: &str) -> ContentDto {
        ContentDto {
            title: Some(title.to_string()),
            ..ContentDto::default()
        }
    }

    fn genre_change(merge: GenreMerge, genres: &[&str]) -> ContentDto {
        ContentDto {
            genre_list: Some(GenreChange {
                merge,
                genres: genres.iter().map(|g| g.to_string()).collect(),
            }),
            ..ContentDto::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryContentStore::new();
        let created = store.create(titled("Heat")).await.unwrap().unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_create_without_title_yields_nothing() {
        let store = InMemoryContentStore::new();
        assert!(store.create(ContentDto::default()).await.unwrap().is_none());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_creation() {
        let store = InMemoryContentStore::new();
        for title in ["First", "Second", "Third"] {
            store.create(titled(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_genre_union_then_difference() {
        let store = InMemoryContentStore::new();
        let mut dto = titled("Heat");
        dto.genre_list = genre_change(GenreMerge::Replace, &["Drama"]).genre_list;
        let id = store.create(dto).await.unwrap().unwrap().id;

        let added = store
            .update(id, genre_change(GenreMerge::Union, &["Comedy", "Drama"]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(added.genre_list, vec!["Drama", "Comedy"]);
        assert_eq!(added.title, "Heat");

        let removed = store
            .update(id, genre_change(GenreMerge::Difference, &["Drama"]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(removed.genre_list, vec!["Comedy"]);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = InMemoryContentStore::new();
        let result = store.update(Uuid::new_v4(), titled("Heat")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = InMemoryContentStore::new();
        let id = store.create(titled("Heat")).await.unwrap().unwrap().id;

        assert_eq!(store.delete(id).await.unwrap(), Some(id));
        assert_eq!(store.delete(id).await.unwrap(), None);
    }
}
