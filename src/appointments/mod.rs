mod requests;
mod responses;

pub use self::{requests::CreateAppointmentRequest, responses::AppointmentItem};

use crate::{
    database::appointments::AppointmentStore, models::appointments::NewAppointment, protocol,
};
use actix_web::{web, HttpResponse};
use anyhow::Context;
use log::{debug, info};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/appointments")
            .app_data(protocol::json_config())
            .app_data(protocol::path_config())
            .service(
                web::resource("")
                    .route(web::post().to(create))
                    .route(web::get().to(list)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete))),
    );
}

crate::store_funcs! {
    create(store: web::Data<dyn AppointmentStore>, info: web::Json<CreateAppointmentRequest>),
    list(store: web::Data<dyn AppointmentStore>),
    delete(store: web::Data<dyn AppointmentStore>, path: web::Path<i64>),
}

async fn create_impl(
    store: web::Data<dyn AppointmentStore>,
    info: web::Json<CreateAppointmentRequest>,
) -> anyhow::Result<HttpResponse> {
    let data: NewAppointment = info.into_inner().into();
    let store = store.into_inner();
    let res = web::block(move || store.create(data))
        .await
        .context("Blocking pool error")??;

    info!(
        "event=appointment_create module=appointments status=ok id={}",
        res.id
    );
    Ok(HttpResponse::Ok().json(AppointmentItem::from(res)))
}

async fn list_impl(store: web::Data<dyn AppointmentStore>) -> anyhow::Result<HttpResponse> {
    let store = store.into_inner();
    let res = web::block(move || store.list())
        .await
        .context("Blocking pool error")??;

    debug!(
        "event=appointment_list module=appointments status=ok count={}",
        res.len()
    );
    let items = res.into_iter().map(AppointmentItem::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(items))
}

async fn delete_impl(
    store: web::Data<dyn AppointmentStore>,
    path: web::Path<i64>,
) -> anyhow::Result<HttpResponse> {
    let id = path.into_inner();
    let store = store.into_inner();
    let removed = web::block(move || store.delete(id))
        .await
        .context("Blocking pool error")??;

    info!(
        "event=appointment_delete module=appointments status=ok id={} removed={}",
        id, removed
    );
    Ok(HttpResponse::Ok().finish())
}
