// Model exports
pub mod requests;
pub mod responses;
pub mod upstream;

pub use requests::{MapsRequest, MapsQuery, FeedbackEmailRequest};
pub use responses::{
    AutocompleteResponse, Prediction, PlaceDetailsResponse, LatLng,
    DistanceResponse, MapsResponse, FeedbackEmailResponse, HealthResponse, ErrorResponse,
};
