//! Domain entities - the core business objects.

mod content;

pub use content::{Content, ContentDto, GenreChange, GenreMerge};
