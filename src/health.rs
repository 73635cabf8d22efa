use actix_web::{web, HttpResponse};
use anyhow::Context;
use serde_json::json;

use crate::database::appointments::AppointmentStore;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)));
}

crate::store_funcs! {
    health(store: web::Data<dyn AppointmentStore>),
}

async fn health_impl(store: web::Data<dyn AppointmentStore>) -> anyhow::Result<HttpResponse> {
    let store = store.into_inner();
    web::block(move || store.check())
        .await
        .context("Blocking pool error")??;

    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
