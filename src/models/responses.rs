use serde::{Deserialize, Serialize};

/// Address suggestion returned to the quote wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub place_id: String,
    pub description: String,
    /// Upstream object as received, match highlights included
    pub structured_formatting: serde_json::Value,
}

/// Response for the `autocomplete` action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Response for the `place-details` action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetailsResponse {
    pub formatted_address: String,
    /// Whitespace stripped; empty when the place has no postal code
    pub postal_code: String,
    pub location: LatLng,
}

/// Response for the `distance` action
///
/// Serialized untagged: a route yields the measured form, no route yields
/// the null form with an explanatory message. Both are HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistanceResponse {
    Route {
        distance_km: f64,
        duration_minutes: i64,
        distance_text: String,
        duration_text: String,
    },
    NoRoute {
        distance_km: Option<f64>,
        duration_minutes: Option<i64>,
        error: String,
    },
}

impl DistanceResponse {
    pub fn no_route() -> Self {
        DistanceResponse::NoRoute {
            distance_km: None,
            duration_minutes: None,
            error: "No route found".to_string(),
        }
    }
}

/// Any maps gateway success body; each action keeps its own shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapsResponse {
    Autocomplete(AutocompleteResponse),
    PlaceDetails(PlaceDetailsResponse),
    Distance(DistanceResponse),
}

/// Feedback mail accepted by the email provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEmailResponse {
    pub success: bool,
    #[serde(rename = "emailId")]
    pub email_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
