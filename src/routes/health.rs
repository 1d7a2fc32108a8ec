use actix_web::{HttpResponse, Responder};
use crate::models::HealthResponse;

/// Health check endpoint
///
/// Liveness only; upstream APIs are not probed.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

