//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod observer;
mod repository;

pub use observer::{ContentEvent, ContentObserver, NoopObserver, Operation};
pub use repository::ContentStore;
