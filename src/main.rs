mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::net::TcpListener;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Settings;
use crate::services::{MongoUserStore, UserStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Required configuration is checked here, before anything connects
    let settings = Settings::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("🚀 Starting User Records Service...");
    log::info!(
        "📊 Database: {} / collection: {}",
        settings.mongo.database,
        settings.mongo.collection
    );

    // Claim the socket before connecting, so a bind failure leaves nothing open
    let (host, port) = settings.bind_address();
    let listener = bind_listener(&host, port).map_err(|e| {
        log::error!("❌ Failed to bind {}:{}: {}", host, port, e);
        e
    })?;

    // Initialize MongoDB connection
    let db = database::MongoDB::connect(&settings.mongo).await.map_err(|e| {
        log::error!("❌ Failed to connect to MongoDB: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e)
    })?;

    log::info!("✅ MongoDB connected successfully");

    let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(db.clone(), &settings.mongo.collection));
    let store_data = web::Data::from(store);
    let cors_origins = settings.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/docs/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/openapi.json", host, port);

    // Start HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(middleware::cors(&cors_origins))
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/openapi.json", api::swagger::ApiDoc::openapi())
            )
            .route("/health", web::get().to(api::health::health_check))
            .configure(api::users::configure)
    })
    .listen(listener);

    let result = match server {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    db.shutdown().await;
    log::info!("👋 Server stopped");

    result
}

fn bind_listener(host: &str, port: u16) -> io::Result<TcpListener> {
    TcpListener::bind((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_fails_on_a_port_already_in_use() {
        let taken = bind_listener("127.0.0.1", 0).unwrap();
        let port = taken.local_addr().unwrap().port();

        assert!(bind_listener("127.0.0.1", port).is_err());
    }
}
