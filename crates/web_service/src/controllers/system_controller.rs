use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// Configure system routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

/// Liveness probe.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
