// Service exports
pub mod mailer;
pub mod maps;

pub use mailer::FeedbackMailer;
pub use maps::MapsClient;
