//! Healthcare Demo API
//!
//! Main entry point for the healthcare demo service.

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

use healthcare_demo::{api, config, db::Database, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = config::load_config().context("Failed to load configuration")?;

    telemetry::init(&config.log)?;

    let database = if config.store.seed {
        Database::seeded()
    } else {
        Database::empty()
    };
    let database = web::Data::new(database);
    let auth = web::Data::new(config.auth.clone());
    let allowed_origins = config.cors.allowed_origins.clone();

    info!(
        host = %config.server.host,
        port = config.server.port,
        seeded = config.store.seed,
        auth = config.auth.enabled,
        "starting healthcare demo API"
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(database.clone())
            .app_data(auth.clone())
            .wrap(api::middleware::error_handlers())
            .wrap(api::middleware::cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .configure(api::configure)
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.server.host.as_str(), config.server.port))
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?
        .run()
        .await
        .context("HTTP server terminated with an error")
}
