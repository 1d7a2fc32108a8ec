use actix_web::{web, HttpResponse, Responder};
use tracing::Instrument;
use crate::models::{MapsQuery, MapsRequest};
use super::{error_response, AppState};

/// Maps gateway endpoint
///
/// POST /api/v1/maps
///
/// Request body:
/// ```json
/// {
///   "action": "autocomplete|place-details|distance",
///   "input": "string",
///   "place_id": "string",
///   "origins": "string",
///   "destinations": "string"
/// }
/// ```
pub async fn maps_gateway(
    state: web::Data<AppState>,
    req: web::Json<MapsRequest>,
) -> impl Responder {
    let span = tracing::info_span!(
        "maps",
        request_id = %uuid::Uuid::new_v4(),
        action = %req.action,
    );

    async move {
        if let Err(e) = state.maps.ensure_configured() {
            return error_response(&e);
        }

        // The body is read once; each branch gets only the fields it needs
        let query = match MapsQuery::try_from(req.into_inner()) {
            Ok(query) => query,
            Err(e) => return error_response(&e),
        };

        match state.maps.execute(&query).await {
            Ok(body) => {
                tracing::info!("Maps {} succeeded", query.action());
                HttpResponse::Ok().json(body)
            }
            Err(e) => error_response(&e),
        }
    }
    .instrument(span)
    .await
}
