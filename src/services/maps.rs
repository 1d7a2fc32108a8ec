use crate::config::MapsSettings;
use crate::core::{extract_postal_code, is_short_input, to_distance, to_prediction};
use crate::error::{GatewayError, Result};
use crate::models::upstream::{GoogleAutocomplete, GoogleDistanceMatrix, GooglePlaceDetails};
use crate::models::{
    AutocompleteResponse, DistanceResponse, MapsQuery, MapsResponse, PlaceDetailsResponse,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const PLACE_DETAILS_FIELDS: &str = "formatted_address,address_components,geometry";

/// Google Maps web services client
///
/// Handles the three lookups the quote wizard needs:
/// - Address autocomplete restricted to one country
/// - Place details (address, postal code, coordinates)
/// - Driving distance between two addresses
pub struct MapsClient {
    base_url: String,
    api_key: Option<String>,
    country: String,
    language: String,
    autocomplete_types: String,
    client: Client,
}

impl MapsClient {
    /// Create a new maps client
    pub fn new(settings: &MapsSettings) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            country: settings.country.clone(),
            language: settings.language.clone(),
            autocomplete_types: settings.autocomplete_types.clone(),
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fails with a configuration error when no API key is set
    pub fn ensure_configured(&self) -> Result<()> {
        self.api_key().map(|_| ())
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Config("Google Maps API key not configured".to_string()))
    }

    /// Run one resolved maps request against upstream
    pub async fn execute(&self, query: &MapsQuery) -> Result<MapsResponse> {
        match query {
            MapsQuery::Autocomplete { input } => {
                self.autocomplete(input).await.map(MapsResponse::Autocomplete)
            }
            MapsQuery::PlaceDetails { place_id } => {
                self.place_details(place_id).await.map(MapsResponse::PlaceDetails)
            }
            MapsQuery::Distance { origins, destinations } => {
                self.distance(origins, destinations).await.map(MapsResponse::Distance)
            }
        }
    }

    /// Address predictions for a partially typed input
    pub async fn autocomplete(&self, input: &str) -> Result<AutocompleteResponse> {
        let key = self.api_key()?;

        if is_short_input(input) {
            tracing::debug!("Autocomplete input too short ({} chars), skipping upstream", input.chars().count());
            return Ok(AutocompleteResponse::default());
        }

        let url = format!(
            "{}/place/autocomplete/json?input={}&components={}&types={}&language={}&key={}",
            self.base_url,
            urlencoding::encode(input),
            urlencoding::encode(&format!("country:{}", self.country)),
            urlencoding::encode(&self.autocomplete_types),
            urlencoding::encode(&self.language),
            urlencoding::encode(key),
        );

        let body: GoogleAutocomplete = self.get_json(&url).await?;

        if body.status != "OK" && body.status != "ZERO_RESULTS" {
            return Err(upstream_error(&body.status, body.error_message.as_deref()));
        }

        tracing::debug!("Autocomplete returned {} predictions", body.predictions.len());

        Ok(AutocompleteResponse {
            predictions: body.predictions.into_iter().map(to_prediction).collect(),
        })
    }

    /// Address, postal code and coordinates for a place
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse> {
        let key = self.api_key()?;

        let url = format!(
            "{}/place/details/json?place_id={}&fields={}&language={}&key={}",
            self.base_url,
            urlencoding::encode(place_id),
            urlencoding::encode(PLACE_DETAILS_FIELDS),
            urlencoding::encode(&self.language),
            urlencoding::encode(key),
        );

        let body: GooglePlaceDetails = self.get_json(&url).await?;

        if body.status != "OK" {
            return Err(upstream_error(&body.status, body.error_message.as_deref()));
        }

        let place = body
            .result
            .ok_or_else(|| GatewayError::Upstream("Google Maps API error: missing result".to_string()))?;

        let postal_code = extract_postal_code(&place.address_components).unwrap_or_default();

        tracing::debug!("Place details resolved for {} (postal code: {:?})", place_id, postal_code);

        Ok(PlaceDetailsResponse {
            formatted_address: place.formatted_address,
            postal_code,
            location: place.geometry.location,
        })
    }

    /// Driving distance and duration for a single origin/destination pair
    pub async fn distance(&self, origins: &str, destinations: &str) -> Result<DistanceResponse> {
        let key = self.api_key()?;

        let url = format!(
            "{}/distancematrix/json?origins={}&destinations={}&units=metric&language={}&key={}",
            self.base_url,
            urlencoding::encode(origins),
            urlencoding::encode(destinations),
            urlencoding::encode(&self.language),
            urlencoding::encode(key),
        );

        let body: GoogleDistanceMatrix = self.get_json(&url).await?;

        if body.status != "OK" {
            return Err(upstream_error(&body.status, body.error_message.as_deref()));
        }

        let element = body.rows.first().and_then(|row| row.elements.first());
        let shaped = to_distance(element);

        if let DistanceResponse::NoRoute { .. } = shaped {
            tracing::info!(
                "No route between origin and destination (element status: {:?})",
                element.map(|e| e.status.as_str())
            );
        }

        Ok(shaped)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

/// Non-2xx HTTP from Google (the API normally reports errors in `status`)
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Google Maps returned HTTP {}: {}", status, body);
    Err(GatewayError::Upstream(format!("Google Maps API error: HTTP {}", status.as_u16())))
}

fn upstream_error(status: &str, message: Option<&str>) -> GatewayError {
    match message {
        Some(message) => GatewayError::Upstream(format!("Google Maps API error: {} - {}", status, message)),
        None => GatewayError::Upstream(format!("Google Maps API error: {}", status)),
    }
}
