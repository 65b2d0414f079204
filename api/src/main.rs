//! ProSel API server entry point

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;

use ps_api::app::{create_app, AppState};
use ps_core::services::token::TokenServiceConfig;
use ps_infra::{
    DatabasePool, MySqlContractorRepository, MySqlSelectiveProcessRepository,
    MySqlSubscriberRepository,
};
use ps_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    let pool = DatabasePool::new(&config.database).await?;
    log::info!("database pool established");

    let contractors = Arc::new(MySqlContractorRepository::new(pool.get_pool().clone()));
    let processes = Arc::new(MySqlSelectiveProcessRepository::new(pool.get_pool().clone()));
    let subscribers = Arc::new(MySqlSubscriberRepository::new(pool.get_pool().clone()));

    let state = web::Data::new(AppState::new(
        contractors,
        processes,
        subscribers,
        TokenServiceConfig::from(&config.auth),
        config.server.accepted_origin.clone(),
    ));

    let bind_address = config.server.bind_address();
    log::info!("starting server on {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
