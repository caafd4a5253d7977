// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Report service status and database reachability

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health
/// 503 with status "degraded" when the database does not answer
pub async fn health_check(pool: web::Data<SqlitePool>) -> impl Responder {
    let (mut response, status, database) =
        match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
            Ok(_) => (HttpResponse::Ok(), "ok", "ok"),
            Err(e) => {
                log::warn!("Health check database probe failed: {}", e);
                (HttpResponse::ServiceUnavailable(), "degraded", "unavailable")
            }
        };

    response.json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "database": database
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
