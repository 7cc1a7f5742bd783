//! Content service - maps API operations onto the content store.
//!
//! Each operation issues exactly one store call and triages its result into
//! an [`Outcome`]. Store faults are reported to the observer and then treated
//! as absence, so callers only ever see `Success`, `NotFound` or `Failure`.

use std::sync::Arc;

use uuid::Uuid;

use catalog_shared::ContentInput;

use crate::domain::{Content, ContentDto, GenreMerge};
use crate::error::RepoError;
use crate::ports::{ContentEvent, ContentObserver, ContentStore, NoopObserver, Operation};

/// Result of a content operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The requested item, or the whole collection, does not exist.
    NotFound,
    /// The store accepted a create call but produced nothing.
    Failure,
}

impl<T> Outcome<T> {
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// The content API handler.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    observer: Arc<dyn ContentObserver>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>, observer: Arc<dyn ContentObserver>) -> Self {
        Self { store, observer }
    }

    /// A service that reports nothing.
    pub fn unobserved(store: Arc<dyn ContentStore>) -> Self {
        Self::new(store, Arc::new(NoopObserver))
    }

    /// Every stored item. An empty store is `NotFound`, not an empty success.
    pub async fn list(&self) -> Outcome<Vec<Content>> {
        let operation = Operation::List;
        self.requested(operation, None);

        let items = self
            .settle(operation, None, self.store.list_all().await.map(Some))
            .unwrap_or_default();

        if items.is_empty() {
            return self.not_found(operation, None);
        }

        self.observer.observe(&ContentEvent::Succeeded {
            operation,
            id: None,
            count: Some(items.len()),
        });
        Outcome::Success(items)
    }

    pub async fn get(&self, id: Uuid) -> Outcome<Content> {
        let operation = Operation::Get;
        self.requested(operation, Some(id));

        let found = self.settle(operation, Some(id), self.store.get(id).await);
        self.found_or_not(operation, id, found)
    }

    pub async fn create(&self, input: ContentInput) -> Outcome<Content> {
        let operation = Operation::Create;
        self.requested(operation, None);

        let created = self.settle(operation, None, self.store.create(input.into()).await);
        match created {
            Some(content) => {
                self.observer.observe(&ContentEvent::Succeeded {
                    operation,
                    id: Some(content.id),
                    count: None,
                });
                Outcome::Success(content)
            }
            None => {
                self.observer.observe(&ContentEvent::CreationFailed);
                Outcome::Failure
            }
        }
    }

    pub async fn update(&self, id: Uuid, input: ContentInput) -> Outcome<Content> {
        self.forward_update(Operation::Update, id, input.into()).await
    }

    /// Add genres to an item. The store decides how duplicates are handled.
    pub async fn add_genres(&self, id: Uuid, genres: Vec<String>) -> Outcome<Content> {
        let dto = ContentDto::from_input(ContentInput::genres_only(genres), GenreMerge::Union);
        self.forward_update(Operation::AddGenres, id, dto).await
    }

    /// Remove genres from an item. Unknown names are left to the store.
    pub async fn remove_genres(&self, id: Uuid, genres: Vec<String>) -> Outcome<Content> {
        let dto =
            ContentDto::from_input(ContentInput::genres_only(genres), GenreMerge::Difference);
        self.forward_update(Operation::RemoveGenres, id, dto).await
    }

    /// Delete an item, answering with the deleted ID.
    pub async fn delete(&self, id: Uuid) -> Outcome<Uuid> {
        let operation = Operation::Delete;
        self.requested(operation, Some(id));

        match self.settle(operation, Some(id), self.store.delete(id).await) {
            Some(deleted) => {
                self.observer.observe(&ContentEvent::Succeeded {
                    operation,
                    id: Some(deleted),
                    count: None,
                });
                Outcome::Success(deleted)
            }
            None => self.not_found(operation, Some(id)),
        }
    }

    async fn forward_update(
        &self,
        operation: Operation,
        id: Uuid,
        dto: ContentDto,
    ) -> Outcome<Content> {
        self.requested(operation, Some(id));

        let updated = self.settle(operation, Some(id), self.store.update(id, dto).await);
        self.found_or_not(operation, id, updated)
    }

    fn found_or_not(
        &self,
        operation: Operation,
        id: Uuid,
        found: Option<Content>,
    ) -> Outcome<Content> {
        match found {
            Some(content) => {
                self.observer.observe(&ContentEvent::Succeeded {
                    operation,
                    id: Some(id),
                    count: None,
                });
                Outcome::Success(content)
            }
            None => self.not_found(operation, Some(id)),
        }
    }

    /// Collapse a store fault into absence after reporting it.
    fn settle<T>(
        &self,
        operation: Operation,
        id: Option<Uuid>,
        result: Result<Option<T>, RepoError>,
    ) -> Option<T> {
        result.unwrap_or_else(|error| {
            self.observer.observe(&ContentEvent::StoreFault {
                operation,
                id,
                error: &error,
            });
            None
        })
    }

    fn requested(&self, operation: Operation, id: Option<Uuid>) {
        self.observer.observe(&ContentEvent::Requested { operation, id });
    }

    fn not_found<T>(&self, operation: Operation, id: Option<Uuid>) -> Outcome<T> {
        self.observer.observe(&ContentEvent::NotFound { operation, id });
        Outcome::NotFound
    }
}
