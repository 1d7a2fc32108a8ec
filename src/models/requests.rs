use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::error::GatewayError;

/// Maps gateway request body
///
/// `action` selects the branch; the remaining fields are only checked for
/// presence by the branch that needs them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapsRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub origins: Option<String>,
    #[serde(default)]
    pub destinations: Option<String>,
    #[serde(default, alias = "placeId")]
    pub place_id: Option<String>,
}

/// A maps request resolved to the fields its action needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapsQuery {
    Autocomplete { input: String },
    PlaceDetails { place_id: String },
    Distance { origins: String, destinations: String },
}

impl TryFrom<MapsRequest> for MapsQuery {
    type Error = GatewayError;

    fn try_from(req: MapsRequest) -> Result<Self, Self::Error> {
        match req.action.as_str() {
            // Absent input goes through the short-input path like ""
            "autocomplete" => Ok(MapsQuery::Autocomplete {
                input: req.input.unwrap_or_default(),
            }),
            "place-details" => {
                let place_id = present(req.place_id).ok_or_else(|| GatewayError::missing_field("place_id"))?;
                Ok(MapsQuery::PlaceDetails { place_id })
            }
            "distance" => match (present(req.origins), present(req.destinations)) {
                (Some(origins), Some(destinations)) => Ok(MapsQuery::Distance { origins, destinations }),
                _ => Err(GatewayError::InvalidInput(
                    "Missing origins or destinations".to_string(),
                )),
            },
            other => Err(GatewayError::UnknownAction(other.to_string())),
        }
    }
}

impl MapsQuery {
    pub fn action(&self) -> &'static str {
        match self {
            MapsQuery::Autocomplete { .. } => "autocomplete",
            MapsQuery::PlaceDetails { .. } => "place-details",
            MapsQuery::Distance { .. } => "distance",
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Request to send a feedback email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackEmailRequest {
    #[validate(length(min = 1, message = "customerEmail is required"))]
    #[serde(rename = "customerEmail", default)]
    pub customer_email: String,
    #[validate(length(min = 1, message = "customerName is required"))]
    #[serde(rename = "customerName", default)]
    pub customer_name: String,
    #[validate(length(min = 1, message = "feedbackLink is required"))]
    #[serde(rename = "feedbackLink", default)]
    pub feedback_link: String,
    #[serde(rename = "isReminder", default)]
    pub is_reminder: Option<bool>,
}

impl FeedbackEmailRequest {
    pub fn reminder(&self) -> bool {
        self.is_reminder.unwrap_or(false)
    }
}
