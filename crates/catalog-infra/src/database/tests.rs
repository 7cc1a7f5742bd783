use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use catalog_core::domain::{ContentDto, GenreChange, GenreMerge};
use catalog_core::ports::ContentStore;

use crate::database::entity::content::{Genres, Model};
use crate::database::postgres_repo::PostgresContentStore;

fn row(id: Uuid, title: &str, genres: &[&str]) -> Model {
    let now = Utc::now();
    Model {
        id,
        title: title.to_owned(),
        sub_title: None,
        description: Some("Content".to_owned()),
        image_url: None,
        duration: Some(170),
        start_time: None,
        end_time: None,
        genre_list: Genres(genres.iter().map(|g| g.to_string()).collect()),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_content_by_id() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row(id, "Heat", &["Crime"])]])
        .into_connection();

    let store = PostgresContentStore::new(db);
    let content = store.get(id).await.unwrap().unwrap();

    assert_eq!(content.id, id);
    assert_eq!(content.title, "Heat");
    assert_eq!(content.genre_list, vec!["Crime"]);
    assert_eq!(content.duration, Some(170));
}

#[tokio::test]
async fn test_list_all_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            row(Uuid::new_v4(), "Heat", &[]),
            row(Uuid::new_v4(), "Ronin", &[]),
        ]])
        .into_connection();

    let store = PostgresContentStore::new(db);
    let titles: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();

    assert_eq!(titles, vec!["Heat", "Ronin"]);
}

#[tokio::test]
async fn test_create_without_title_skips_database() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = PostgresContentStore::new(db);

    let created = store.create(ContentDto::default()).await.unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn test_update_missing_row_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<Model>::new()])
        .into_connection();

    let store = PostgresContentStore::new(db);
    let updated = store
        .update(Uuid::new_v4(), ContentDto::default())
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn test_update_returns_written_row() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![
            vec![row(id, "Heat", &["Drama"])],
            vec![row(id, "Heat", &["Drama", "Comedy"])],
        ])
        .into_connection();

    let store = PostgresContentStore::new(db);
    let dto = ContentDto {
        genre_list: Some(GenreChange {
            merge: GenreMerge::Union,
            genres: vec!["Comedy".to_string()],
        }),
        ..ContentDto::default()
    };
    let updated = store.update(id, dto).await.unwrap().unwrap();

    assert_eq!(updated.genre_list, vec!["Drama", "Comedy"]);
}

#[tokio::test]
async fn test_delete_reports_affected_rows() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let store = PostgresContentStore::new(db);

    assert_eq!(store.delete(id).await.unwrap(), Some(id));
    assert_eq!(store.delete(id).await.unwrap(), None);
}

#[test]
fn test_genres_column_is_plain_json_array() {
    let genres = Genres(vec!["Crime".to_string(), "Drama".to_string()]);

    let expected = serde_json::json!(["Crime", "Drama"]);

    assert_eq!(serde_json::to_value(&genres).unwrap(), expected);
    assert_eq!(
        sea_orm::Value::from(genres),
        sea_orm::Value::Json(Some(Box::new(expected)))
    );
}
