//! Content resource handlers.
//!
//! Bodies are taken as raw bytes and decoded with the explicit parsers in
//! `catalog_shared`, so a bad body is a 400 regardless of content type.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use catalog_core::Outcome;
use catalog_shared::{ContentInput, GenreList};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn respond<T: Serialize>(outcome: Outcome<T>) -> AppResult<HttpResponse> {
    match outcome {
        Outcome::Success(payload) => Ok(HttpResponse::Ok().json(payload)),
        Outcome::NotFound => Err(AppError::NotFound("Content not found".to_string())),
        Outcome::Failure => Err(AppError::Internal(
            "Content store produced no entity".to_string(),
        )),
    }
}

/// GET /api/v1/content
pub async fn list_content(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    respond(state.content.list().await)
}

/// GET /api/v1/content/{id}
pub async fn get_content(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    respond(state.content.get(path.into_inner()).await)
}

/// POST /api/v1/content
pub async fn create_content(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let input = ContentInput::from_json(&body)?;
    respond(state.content.create(input).await)
}

/// PATCH /api/v1/content/{id}
pub async fn update_content(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let input = ContentInput::from_json(&body)?;
    respond(state.content.update(path.into_inner(), input).await)
}

/// DELETE /api/v1/content/{id}
pub async fn delete_content(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    respond(state.content.delete(path.into_inner()).await)
}

/// POST /api/v1/content/{id}/genre
pub async fn add_genres(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let genres = GenreList::from_json(&body)?.into_inner();
    respond(state.content.add_genres(path.into_inner(), genres).await)
}

/// DELETE /api/v1/content/{id}/genre
pub async fn remove_genres(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let genres = GenreList::from_json(&body)?.into_inner();
    respond(state.content.remove_genres(path.into_inner(), genres).await)
}
