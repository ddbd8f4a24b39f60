use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;

use config::Config;
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Loading database from {}", config.database_dir);
    let db = Database::open(&config.database_dir).expect("Failed to load database");
    let db = Arc::new(db);
    log::info!(
        "Loaded {} bags, {} bag cards",
        db.list_bags().len(),
        db.list_bag_cards().len()
    );

    log::info!("Starting bagtrack server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                config: config.clone(),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::bags::config)
            .configure(controllers::bag_cards::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
