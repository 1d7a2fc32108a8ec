//! Wire shapes of the third-party APIs.
//!
//! Only the fields the gateway reads are modelled; everything else in the
//! upstream payloads is ignored. `structured_formatting` is kept opaque and
//! handed to callers untouched.

use serde::{Deserialize, Serialize};
use super::responses::LatLng;

/// Google Places autocomplete response
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleAutocomplete {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Vec<GooglePrediction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GooglePrediction {
    pub place_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub structured_formatting: serde_json::Value,
}

/// Google Place details response
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePlaceDetails {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<GooglePlace>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GooglePlace {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// Google Distance Matrix response
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleDistanceMatrix {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<DistanceRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistanceRow {
    #[serde(default)]
    pub elements: Vec<DistanceElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistanceElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

/// `{text, value}` pair; value is metres or seconds
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

/// Body posted to Resend's `/emails`
#[derive(Debug, Clone, Serialize)]
pub struct ResendEmail<'a> {
    pub from: &'a str,
    pub to: Vec<&'a str>,
    pub subject: &'a str,
    pub html: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResendAccepted {
    pub id: String,
}

/// Resend error body, e.g. `{"statusCode":422,"name":"validation_error","message":"..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct ResendError {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
