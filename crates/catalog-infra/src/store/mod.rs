//! Content stores that need no external services.

mod memory;

pub use memory::InMemoryContentStore;
