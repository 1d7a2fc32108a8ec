// Response shaping and email rendering
pub mod email_template;
pub mod shaping;

pub use email_template::{render_feedback_html, subject, escape_html};
pub use shaping::{
    is_short_input, extract_postal_code, strip_whitespace, metres_to_km, seconds_to_minutes,
    to_distance, to_prediction,
};
