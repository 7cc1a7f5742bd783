//! HTTP handlers and route configuration.

mod content;
mod health;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/v1/content")
                    .app_data(web::PathConfig::default().error_handler(|err, _req| {
                        AppError::BadRequest(format!("Invalid content id: {err}")).into()
                    }))
                    .route("", web::get().to(content::list_content))
                    .route("", web::post().to(content::create_content))
                    .route("/{id}", web::get().to(content::get_content))
                    .route("/{id}", web::patch().to(content::update_content))
                    .route("/{id}", web::delete().to(content::delete_content))
                    .route("/{id}/genre", web::post().to(content::add_genres))
                    .route("/{id}/genre", web::delete().to(content::remove_genres)),
            ),
    );
}
