//! # Catalog Infrastructure
//!
//! Concrete implementations of the `ContentStore` port defined in
//! `catalog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL content store via SeaORM
//!
//! Build with `--no-default-features` for the in-memory store only.

pub mod database;
pub mod store;

pub use database::DatabaseConfig;
pub use store::InMemoryContentStore;

#[cfg(feature = "postgres")]
pub use database::PostgresContentStore;
