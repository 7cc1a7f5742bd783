//! Observer port - where the content service reports what it did.

use std::fmt;

use uuid::Uuid;

use crate::error::RepoError;

/// The content API operation being observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    AddGenres,
    RemoveGenres,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::AddGenres => "add_genres",
            Operation::RemoveGenres => "remove_genres",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something worth reporting about a single request.
#[derive(Debug)]
pub enum ContentEvent<'a> {
    Requested {
        operation: Operation,
        id: Option<Uuid>,
    },
    Succeeded {
        operation: Operation,
        id: Option<Uuid>,
        count: Option<usize>,
    },
    NotFound {
        operation: Operation,
        id: Option<Uuid>,
    },
    CreationFailed,
    StoreFault {
        operation: Operation,
        id: Option<Uuid>,
        error: &'a RepoError,
    },
}

pub trait ContentObserver: Send + Sync {
    fn observe(&self, event: &ContentEvent<'_>);
}

/// Observer that discards every event.
pub struct NoopObserver;

impl ContentObserver for NoopObserver {
    fn observe(&self, _event: &ContentEvent<'_>) {}
}
