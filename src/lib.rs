//! Moving Gateway - upstream API proxy for the moving marketplace site
//!
//! Two stateless request handlers sit behind one HTTP server:
//! a Google Maps gateway (autocomplete, place details, distance) and a
//! feedback mailer forwarding to Resend.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use error::GatewayError;
pub use routes::{configure_routes, handle_json_payload_error, AppState};
pub use services::{FeedbackMailer, MapsClient};
