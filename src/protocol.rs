use actix_web::{error::InternalError, web, HttpResponse};
use log::error;
use serde::{Deserialize, Serialize};

/// Body sent with every non-200 response.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn err<S: ToString>(err: S) -> Self {
        Self {
            success: false,
            err: err.to_string(),
        }
    }
}

/// Rejects unparseable request bodies with 400 instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(SimpleResponse::err(&err));
        InternalError::from_response(err, response).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(SimpleResponse::err(&err));
        InternalError::from_response(err, response).into()
    })
}

pub fn store_failure(event: &str, err: &anyhow::Error) -> HttpResponse {
    error!("event={} status=error error={:#}", event, err);
    HttpResponse::InternalServerError().json(SimpleResponse::err(err))
}

#[macro_export]
macro_rules! store_funcs {
    ( $( $func_name:ident ( $( $arg:ident : $arg_ty:ty ),* $(,)? ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                async fn $func_name( $( $arg: $arg_ty ),* ) -> HttpResponse {
                    match [<$func_name _impl>]( $( $arg ),* ).await {
                        Ok(response) => response,
                        Err(err) => $crate::protocol::store_failure(
                            concat!(module_path!(), "::", stringify!($func_name)),
                            &err,
                        ),
                    }
                }
            }
        )+
    };
}
