#[macro_use]
extern crate diesel;

pub mod appointments;
pub mod config;
pub mod database;
pub mod health;
pub mod logging;
pub mod models;
pub mod protocol;
pub mod schema;

use actix_cors::Cors;
use actix_web::web;
use diesel::{r2d2::ConnectionManager, SqliteConnection};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// Any origin, method, and header may call the service.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(appointments::config).configure(health::config);
}
