use actix_web::{middleware, web, App, HttpServer};
use sip_ai_engine::config::{LoggingSettings, Settings};
use sip_ai_engine::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging from settings; `RUST_LOG` takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting SIP AI Engine...");
    info!(
        "Matcher initialized (gap advice limit: {}), embedding dimension: {}",
        settings.matching.gap_advice_limit, settings.insights.embedding_dimension
    );

    let app_state = AppState::from_settings(&settings);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let cors_settings = settings.cors.clone();

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(routes::build_cors(&cors_settings))
            .wrap(routes::build_default_headers(&cors_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    })
    .workers(workers)
    .bind((host.as_str(), port))
    .map_err(|e| {
        error!("Failed to bind {}:{}: {}", host, port, e);
        e
    })?;

    server.run().await
}
