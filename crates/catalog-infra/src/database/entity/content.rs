//! Content entity for SeaORM.

use sea_orm::{FromJsonQueryResult, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Genre names, stored as a JSONB array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "content")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub sub_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<i32>,
    pub start_time: Option<DateTimeWithTimeZone>,
    pub end_time: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "JsonBinary")]
    pub genre_list: Genres,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Content.
impl From<Model> for catalog_core::domain::Content {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            sub_title: model.sub_title,
            description: model.description,
            image_url: model.image_url,
            duration: model.duration,
            start_time: model.start_time.map(Into::into),
            end_time: model.end_time.map(Into::into),
            genre_list: model.genre_list.0,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Content to SeaORM ActiveModel.
impl From<catalog_core::domain::Content> for ActiveModel {
    fn from(content: catalog_core::domain::Content) -> Self {
        Self {
            id: Set(content.id),
            title: Set(content.title),
            sub_title: Set(content.sub_title),
            description: Set(content.description),
            image_url: Set(content.image_url),
            duration: Set(content.duration),
            start_time: Set(content.start_time.map(Into::into)),
            end_time: Set(content.end_time.map(Into::into)),
            genre_list: Set(Genres(content.genre_list)),
            created_at: Set(content.created_at.into()),
            updated_at: Set(content.updated_at.into()),
        }
    }
}
