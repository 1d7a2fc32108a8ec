use crate::models::upstream::{AddressComponent, DistanceElement, GooglePrediction};
use crate::models::{DistanceResponse, Prediction};

/// Inputs shorter than this never reach the autocomplete upstream
pub const MIN_AUTOCOMPLETE_CHARS: usize = 2;

const METRES_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Whether an autocomplete input is too short to be worth a billed lookup
#[inline]
pub fn is_short_input(input: &str) -> bool {
    input.chars().count() < MIN_AUTOCOMPLETE_CHARS
}

/// Keep only the fields the site renders
pub fn to_prediction(upstream: GooglePrediction) -> Prediction {
    Prediction {
        place_id: upstream.place_id,
        description: upstream.description,
        structured_formatting: upstream.structured_formatting,
    }
}

/// Postal code from the first component tagged `postal_code`, all
/// whitespace removed ("123 45" -> "12345")
pub fn extract_postal_code(components: &[AddressComponent]) -> Option<String> {
    components
        .iter()
        .find(|c| c.types.iter().any(|t| t == "postal_code"))
        .map(|c| strip_whitespace(&c.long_name))
}

#[inline]
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Metres to kilometres, one decimal
#[inline]
pub fn metres_to_km(metres: f64) -> f64 {
    (metres / METRES_PER_KM * 10.0).round() / 10.0
}

/// Seconds to whole minutes, rounded to nearest
#[inline]
pub fn seconds_to_minutes(seconds: f64) -> i64 {
    (seconds / SECONDS_PER_MINUTE).round() as i64
}

/// Shape a distance matrix element; anything but a complete `OK` element
/// means no drivable route.
pub fn to_distance(element: Option<&DistanceElement>) -> DistanceResponse {
    let Some(element) = element.filter(|e| e.status == "OK") else {
        return DistanceResponse::no_route();
    };

    match (&element.distance, &element.duration) {
        (Some(distance), Some(duration)) => DistanceResponse::Route {
            distance_km: metres_to_km(distance.value),
            duration_minutes: seconds_to_minutes(duration.value),
            distance_text: distance.text.clone(),
            duration_text: duration.text.clone(),
        },
        _ => DistanceResponse::no_route(),
    }
}
