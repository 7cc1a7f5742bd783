use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_shared::ContentInput;

/// Content entity - an item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Running time in minutes.
    pub duration: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub genre_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How a genre list in an update is combined with the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreMerge {
    /// The stored list becomes the given list.
    Replace,
    /// Given genres not yet present are appended in order.
    Union,
    /// Given genres are removed wherever they appear.
    Difference,
}

/// A genre list together with the way it should be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreChange {
    pub merge: GenreMerge,
    pub genres: Vec<String>,
}

/// Store-facing update descriptor. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDto {
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub genre_list: Option<GenreChange>,
}

impl ContentDto {
    /// Convert a transport input, tagging its genre list with `merge`.
    pub fn from_input(input: ContentInput, merge: GenreMerge) -> Self {
        Self {
            title: input.title,
            sub_title: input.sub_title,
            description: input.description,
            image_url: input.image_url,
            duration: input.duration,
            start_time: input.start_time,
            end_time: input.end_time,
            genre_list: input
                .genre_list
                .map(|genres| GenreChange { merge, genres }),
        }
    }
}

/// Plain edits replace the genre list wholesale.
impl From<ContentInput> for ContentDto {
    fn from(input: ContentInput) -> Self {
        Self::from_input(input, GenreMerge::Replace)
    }
}

impl Content {
    /// Build a new content item from a descriptor.
    ///
    /// Returns `None` when the descriptor has no usable title.
    pub fn from_dto(dto: ContentDto) -> Option<Self> {
        let title = dto.title.filter(|t| !t.trim().is_empty())?;
        let now = Utc::now();

        let mut genre_list = Vec::new();
        if let Some(change) = dto.genre_list {
            change.apply(&mut genre_list);
        }

        Some(Self {
            id: Uuid::new_v4(),
            title,
            sub_title: dto.sub_title,
            description: dto.description,
            image_url: dto.image_url,
            duration: dto.duration,
            start_time: dto.start_time,
            end_time: dto.end_time,
            genre_list,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the fields present in `dto` onto this item.
    pub fn apply(&mut self, dto: ContentDto) {
        if let Some(title) = dto.title {
            self.title = title;
        }
        if let Some(sub_title) = dto.sub_title {
            self.sub_title = Some(sub_title);
        }
        if let Some(description) = dto.description {
            self.description = Some(description);
        }
        if let Some(image_url) = dto.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(duration) = dto.duration {
            self.duration = Some(duration);
        }
        if let Some(start_time) = dto.start_time {
            self.start_time = Some(start_time);
        }
        if let Some(end_time) = dto.end_time {
            self.end_time = Some(end_time);
        }
        if let Some(change) = dto.genre_list {
            change.apply(&mut self.genre_list);
        }
        self.updated_at = Utc::now();
    }
}

impl GenreChange {
    /// Apply this change to `current`. Comparison is case-sensitive.
    pub fn apply(self, current: &mut Vec<String>) {
        match self.merge {
            GenreMerge::Replace => *current = self.genres,
            GenreMerge::Union => {
                for genre in self.genres {
                    if !current.contains(&genre) {
                        current.push(genre);
                    }
                }
            }
            GenreMerge::Difference => current.retain(|g| !self.genres.contains(g)),
        }
    }
}
