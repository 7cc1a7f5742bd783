//! # Catalog Core
//!
//! The domain layer of the content catalog.
//! This crate holds the content model, the ports infrastructure must
//! implement, and the request-to-outcome logic of the content API. It has
//! no web or database dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::RepoError;
pub use service::{ContentService, Outcome};
