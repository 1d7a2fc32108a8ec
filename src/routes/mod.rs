// Route exports
pub mod cors;
pub mod feedback;
pub mod health;
pub mod maps;

use actix_web::{error, http::{Method, StatusCode}, web, HttpRequest, HttpResponse};
use crate::error::GatewayError;
use crate::models::ErrorResponse;
use crate::services::{FeedbackMailer, MapsClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub maps: Arc<MapsClient>,
    pub mailer: Arc<FeedbackMailer>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/maps")
                    .route(web::post().to(maps::maps_gateway))
                    .route(web::method(Method::OPTIONS).to(cors::preflight)),
            )
            .service(
                web::resource("/feedback-email")
                    .route(web::post().to(feedback::send_feedback_email))
                    .route(web::method(Method::OPTIONS).to(cors::preflight)),
            ),
    );
}

/// Convert a handler error into the JSON error envelope
///
/// Every failure is a 500; callers read the message, not the status.
pub fn error_response(err: &GatewayError) -> HttpResponse {
    if err.is_client_error() {
        tracing::warn!("Rejected request: {}", err);
    } else {
        tracing::error!("Request failed: {}", err);
    }

    HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
}

/// Error for bodies that never reach a handler
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.error.clone()))
    }
}

/// Body extractor settings shared by every JSON endpoint
///
/// The Content-Type header is not checked: browsers posting `text/plain`
/// to skip a preflight still get their body parsed as JSON.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: format!("Invalid JSON: {}", err),
    }
    .into()
}
