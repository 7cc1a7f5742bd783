//! # Catalog Shared
//!
//! Wire types shared between the API server and its clients.
//! Nothing here depends on the web framework; request bodies are decoded
//! through the explicit `from_json` constructors in [`dto`].

pub mod dto;
pub mod response;

pub use dto::{ContentInput, GenreList, InputError};
pub use response::ErrorResponse;
