//! # Quill API Server
//!
//! The Actix-web HTTP entry point of the blog backend.

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod background;
mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::error::json_error_handler;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        storage = ?config.storage,
        "Starting Quill API server"
    );

    let state = AppState::build(&config).await?;
    background::notifications::start(&state)
        .await
        .context("starting notification worker")?;

    let image_dir = config.public_dir.join("img");
    std::fs::create_dir_all(&image_dir)
        .with_context(|| format!("creating {}", image_dir.display()))?;

    let cors_origins = config.cors_origins.clone();
    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_origins))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(data.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(handlers::configure_routes)
            .service(actix_files::Files::new("/img", image_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("binding {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}

/// No configured origins means any origin may call the API.
fn cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::AUTHORIZATION,
        ])
        .max_age(3600);

    if origins.is_empty() {
        return cors.allow_any_origin();
    }
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}
