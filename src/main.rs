use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use property_revenue::config::{AppConfig, Config};
use property_revenue::core::traits::QueryExecutor;
use property_revenue::middleware::{ErrorHandler, RequestId};
use property_revenue::modules::{health, revenue};
use property_revenue::revenue::{MySqlQueryExecutor, RevenueService};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("property_revenue={},actix_web=info", app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if app.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(std::io::Error::other)?;
    config.validate().map_err(std::io::Error::other)?;

    init_tracing(&config.app);

    tracing::info!("Starting property revenue service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let executor = Arc::new(MySqlQueryExecutor::new(config.database.clone()));

    // The fallback table covers an unreachable store, so this is not fatal
    if let Err(e) = executor.initialize().await {
        tracing::warn!("Database unavailable at startup, serving fallback revenue: {}", e);
    }

    let service = web::Data::new(RevenueService::new(executor));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .configure(health::configure)
            .configure(revenue::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
