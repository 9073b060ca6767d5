use actix_web::{middleware::Logger, web, App, HttpServer};
use reporter_api::config::EnvConfig;
use reporter_api::db::database_service::DatabaseService;
use reporter_api::routes::configure_routes;
use reporter_api::search::{algolia::AlgoliaClient, SearchIndex};
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?,
    );

    let search: Arc<dyn SearchIndex> = Arc::new(
        AlgoliaClient::new(&config.search).map_err(io::Error::other)?,
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(web::Data::new(Arc::clone(&search)))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
