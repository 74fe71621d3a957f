mod config;
mod services;
mod store;

use crate::config::Config;
use crate::store::{seed, DocumentStore, SqliteStore};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let sqlite = SqliteStore::open(&config.db_path).map_err(io::Error::other)?;
    info!("Base de datos abierta en {}", config.db_path);

    if config.seed {
        if let Err(e) = seed::seed_if_empty(&sqlite) {
            warn!("No se han podido cargar los deportistas de ejemplo: {}", e);
        }
    }

    let store: Arc<dyn DocumentStore> = Arc::new(sqlite);

    info!("Microservicio MS Plantilla escuchando en {}", config.url());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(services::plantilla::cors())
            .app_data(web::Data::from(store.clone()))
            .service(services::plantilla::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
