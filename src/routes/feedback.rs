use actix_web::{web, HttpResponse, Responder};
use tracing::Instrument;
use validator::Validate;
use crate::error::GatewayError;
use crate::models::FeedbackEmailRequest;
use super::{error_response, AppState};

/// Send feedback email endpoint
///
/// POST /api/v1/feedback-email
///
/// Request body:
/// ```json
/// {
///   "customerEmail": "string",
///   "customerName": "string",
///   "feedbackLink": "string",
///   "isReminder": false
/// }
/// ```
pub async fn send_feedback_email(
    state: web::Data<AppState>,
    req: web::Json<FeedbackEmailRequest>,
) -> impl Responder {
    let span = tracing::info_span!(
        "feedback_email",
        request_id = %uuid::Uuid::new_v4(),
        reminder = req.reminder(),
    );

    async move {
        if let Err(e) = state.mailer.ensure_configured() {
            return error_response(&e);
        }

        if let Err(errors) = req.validate() {
            return error_response(&GatewayError::InvalidInput(format!(
                "Validation failed: {}",
                errors
            )));
        }

        match state.mailer.send_feedback(&req).await {
            Ok(body) => HttpResponse::Ok().json(body),
            Err(e) => error_response(&e),
        }
    }
    .instrument(span)
    .await
}
