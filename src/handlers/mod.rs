// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and wire the /doctors routes

pub mod doctors;
pub mod health;
pub mod reviews;

pub use health::config as health_config;

use crate::errors::DoctorsError;
use actix_web::{web, HttpResponse, HttpResponseBuilder};

/// Plain-text confirmation response
pub(crate) fn text(mut builder: HttpResponseBuilder, body: String) -> HttpResponse {
    builder.content_type("text/plain; charset=utf-8").body(body)
}

/// Map JSON payload errors onto the application error body
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| DoctorsError::InvalidInput(err.to_string()).into())
}

/// Map malformed path ids onto the application error body
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| DoctorsError::InvalidInput(err.to_string()).into())
}

/// Configuration for doctor and review routes
/// Both live under one /doctors scope so nested review paths resolve
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::scope("/doctors")
                .configure(doctors::config)
                .configure(reviews::config),
        );
}
