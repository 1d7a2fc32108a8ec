use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub maps: MapsSettings,
    #[serde(default)]
    pub email: EmailSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Google Maps web services
#[derive(Debug, Clone, Deserialize)]
pub struct MapsSettings {
    /// Missing key is not fatal at startup; every maps call fails instead.
    pub api_key: Option<String>,
    #[serde(default = "default_maps_base_url")]
    pub base_url: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_autocomplete_types")]
    pub autocomplete_types: String,
}

impl Default for MapsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_maps_base_url(),
            country: default_country(),
            language: default_language(),
            autocomplete_types: default_autocomplete_types(),
        }
    }
}

fn default_maps_base_url() -> String { "https://maps.googleapis.com/maps/api".to_string() }
fn default_country() -> String { "se".to_string() }
fn default_language() -> String { "sv".to_string() }
fn default_autocomplete_types() -> String { "address".to_string() }

/// Resend transactional email
#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_email_base_url")]
    pub base_url: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_email_base_url(),
            from_address: default_from_address(),
        }
    }
}

fn default_email_base_url() -> String { "https://api.resend.com".to_string() }
fn default_from_address() -> String { "Moving Feedback <onboarding@resend.dev>".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with GATEWAY_)
    /// 4. Provider variables: GOOGLE_MAPS_API_KEY, RESEND_API_KEY, FEEDBACK_FROM_EMAIL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GATEWAY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_provider_env(settings, |name| std::env::var(name).ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_provider_env(settings, |name| std::env::var(name).ok())?;

        settings.try_deserialize()
    }
}

/// Overlay the variable names the hosting platforms and provider dashboards
/// hand out, so deployments don't have to know the GATEWAY__ layout.
fn apply_provider_env<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = [
        ("GOOGLE_MAPS_API_KEY", "maps.api_key"),
        ("RESEND_API_KEY", "email.api_key"),
        ("FEEDBACK_FROM_EMAIL", "email.from_address"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in overrides {
        // Empty values are treated as unset
        if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
