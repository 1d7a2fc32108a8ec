use actix_web::{middleware, web, App, HttpServer};
use moving_gateway::config::{LoggingSettings, Settings};
use moving_gateway::routes::{self, cors, AppState};
use moving_gateway::services::{FeedbackMailer, MapsClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging);

    info!("Starting moving gateway...");

    let maps = MapsClient::new(&settings.maps).map_err(|e| {
        error!("Failed to build maps HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    if !maps.is_configured() {
        warn!("GOOGLE_MAPS_API_KEY is not set; every maps request will fail");
    }

    let mailer = FeedbackMailer::new(&settings.email).map_err(|e| {
        error!("Failed to build email HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    if !mailer.is_configured() {
        warn!("RESEND_API_KEY is not set; every feedback email will fail");
    }

    info!("Feedback emails sent from {}", mailer.from_address());

    let app_state = AppState {
        maps: Arc::new(maps),
        mailer: Arc::new(mailer),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors::permissive())
            .wrap(cors::default_headers())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
