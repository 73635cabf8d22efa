use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use appointment_service::{
    config::Config,
    database::{
        self,
        appointments::{AppointmentStore, SqliteAppointmentStore},
    },
    logging,
};
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    let _logger = logging::init_logging(&config.log_level)?;

    let pool = database::build_pool(&config.database_url, config.pool_size)?;
    database::init_schema(&pool)?;
    let store: Arc<dyn AppointmentStore> = Arc::new(SqliteAppointmentStore::new(pool));
    let store = web::Data::from(store);

    info!(
        "event=server_start bind={} database_url={} pool_size={}",
        config.bind_address, config.database_url, config.pool_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(appointment_service::cors())
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(appointment_service::routes)
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await?;

    Ok(())
}
