mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use handlers::not_found;
use middleware::cors::CorsHeaders;
use services::{GeocodeService, SearchService};

#[derive(Clone)]
pub struct AppState {
    pub search_service: SearchService,
    pub geocode_service: GeocodeService,
    pub start_time: Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting Naver search proxy on port {}",
        config.server.port
    );

    let state = AppState {
        search_service: SearchService::new(config.naver.clone()),
        geocode_service: GeocodeService::new(config.ncp.clone(), config.google.clone()),
        start_time: Instant::now(),
    };

    let payload_limit = config.server.max_json_payload_size;

    // Create HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(payload_limit))
            .wrap(CorsHeaders)
            .wrap(Logger::default())
            .configure(routes::api::config)
            .default_service(web::route().to(not_found))
    })
    .workers(config.server.workers)
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Proxy running at http://{}:{}",
        config.server.host, config.server.port
    );
    info!(
        "Endpoint: POST http://{}:{}/search",
        config.server.host, config.server.port
    );

    // Runs until interrupted; actix drains the accept loop on SIGINT.
    server.run().await?;

    info!("Server stopped");
    Ok(())
}
